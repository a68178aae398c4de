use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisingError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("student not found: {0}")]
    StudentNotFound(String),

    #[error("invalid schedule selection: {0}")]
    Selection(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, AdvisingError>;
