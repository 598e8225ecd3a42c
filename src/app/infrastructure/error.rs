use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Options error: {0}")]
    Options(#[from] json5::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Highlight error: {0}")]
    Highlight(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
