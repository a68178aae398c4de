use crate::error::{AdvisingError, Result};
use crate::types::config::{AdvisingConfig, ConfigLayer};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "advising.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".advising/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/advising/config.toml";

/// Loads `advising.toml` from the data directory, layered over the global
/// config and under the local override. `None` when the data directory has
/// no config of its own.
pub fn load_config(data_dir: &Path) -> Result<Option<AdvisingConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(data_dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    data_dir: &Path,
    global_path: Option<&Path>,
) -> Result<Option<AdvisingConfig>> {
    let data_dir_path = data_dir.join(DEFAULT_CONFIG_FILE);
    if !data_dir_path.exists() {
        tracing::debug!(path = %data_dir_path.display(), "no config file, using defaults");
        return Ok(None);
    }

    let local_path = data_dir.join(DEFAULT_LOCAL_FILE);
    let mut cfg = AdvisingConfig::default();
    for path in global_path
        .into_iter()
        .chain([data_dir_path.as_path(), local_path.as_path()])
    {
        if path.exists() {
            tracing::debug!(path = %path.display(), "applying config layer");
            cfg.apply(read_layer(path)?);
        }
    }

    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<ConfigLayer> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AdvisingError::ConfigParse(format!("{}: {}", path.display(), e)))
}
