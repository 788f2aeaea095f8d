use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Timestamp parsing error: '{value}' in {path}")]
    TimestampParse { value: String, path: String },

    #[error("Configuration error: {0}")]
    ConfigFile(#[from] config::ConfigError),

    #[error("Unknown country: '{0}' (expected Benin, Sierra Leone or Togo)")]
    UnknownCountry(String),

    #[error("No datasets could be loaded - nothing to analyze")]
    NoDataLoaded,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Async task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
