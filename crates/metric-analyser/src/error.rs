use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyserError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input series contains no samples")]
    EmptyInput,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type AnalyserResult<T> = Result<T, AnalyserError>;
