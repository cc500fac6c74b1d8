use itemsapi_core::item::ItemError;
use itemsapi_core::storage::{repository_error_to_status_code, RepositoryError};
use lambda_http::{Body, Error, Response};
use serde_json::json;
use thiserror::Error;

use super::JsonResponse;

/// Everything a handler can fail with. Converted into a JSON
/// `{"error": <message>}` response at the router boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    BadRequest(#[from] ItemError),
    #[error("Item not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::NotFound => 404,
            AppError::MethodNotAllowed => 405,
            AppError::Repository(err) => repository_error_to_status_code(err),
            AppError::Serialization(_) => 500,
        }
    }

    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let status = self.status_code();
        let message = self.to_string();

        if status >= 500 {
            tracing::error!(status, error = %message, "Request failed");
        } else {
            tracing::warn!(status, message = %message, "API error");
        }

        JsonResponse::new(status, json!({ "error": message })).into_response()
    }
}
