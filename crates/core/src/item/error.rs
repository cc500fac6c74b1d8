use thiserror::Error;

/// Client input errors raised while reading a create or update request.
///
/// The display strings are returned to callers verbatim in the `error` field
/// of a 400 response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Request body is required")]
    BodyRequired,
    #[error("Invalid JSON in request body")]
    InvalidJson,
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Item ID is required")]
    MissingId,
    #[error("Item ID must be a non-empty string")]
    InvalidId,
    #[error("Invalid request body: {0}")]
    InvalidField(String),
}
