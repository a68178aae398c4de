pub mod json;
pub mod md;

use crate::error::AdvisingError;
use crate::scoring::AssessmentReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_config(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render(report: &AssessmentReport, format: OutputFormat) -> Result<String, AdvisingError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AdvisingError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
