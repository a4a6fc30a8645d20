/// Errors raised by data container operations.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A segment of the requested path does not exist.
    #[error("unknown key: {0}")]
    MissingKey(String),

    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
