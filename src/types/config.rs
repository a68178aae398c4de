use crate::error::AdvisingError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_STUDENTS_FILE: &str = "students.csv";
pub const DEFAULT_COURSES_FILE: &str = "courses.csv";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisingConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_students")]
    pub students: String,
    #[serde(default = "default_courses")]
    pub courses: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            students: default_students(),
            courses: default_courses(),
        }
    }
}

fn default_students() -> String {
    DEFAULT_STUDENTS_FILE.to_string()
}

fn default_courses() -> String {
    DEFAULT_COURSES_FILE.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

/// One `advising.toml` file. Keys left out keep the value from the layer below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub data: DataLayer,
    #[serde(default)]
    pub report: ReportLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataLayer {
    pub students: Option<String>,
    pub courses: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportLayer {
    pub format: Option<String>,
}

impl AdvisingConfig {
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(students) = layer.data.students {
            self.data.students = students;
        }
        if let Some(courses) = layer.data.courses {
            self.data.courses = courses;
        }
        if let Some(format) = layer.report.format {
            self.report.format = Some(format);
        }
    }

    pub fn students_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data.students)
    }

    pub fn courses_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data.courses)
    }

    pub fn validate(&self) -> Result<(), AdvisingError> {
        for (key, value) in [
            ("data.students", &self.data.students),
            ("data.courses", &self.data.courses),
        ] {
            if value.trim().is_empty() {
                return Err(AdvisingError::ConfigParse(format!(
                    "{key} must be a non-empty path"
                )));
            }
        }

        if let Some(format) = &self.report.format {
            if !matches!(format.as_str(), "md" | "json") {
                return Err(AdvisingError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        Ok(())
    }
}
