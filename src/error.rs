use thiserror::Error;

#[derive(Error, Debug)]
pub enum CiDeltaError {
    #[error("malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    #[error("completed before started: {start} -> {end}")]
    InvalidDurationOrdering { start: String, end: String },

    #[error("provider returned no usable data: {0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CiDeltaError>;
