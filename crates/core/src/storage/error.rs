use thiserror::Error;

/// Errors that can occur when constructing a scan limit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanLimitError {
    #[error("Invalid scan limit: must be at least 1")]
    Zero,
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
