mod error;
mod items;
mod response;

pub use error::AppError;
pub use response::JsonResponse;

use lambda_http::{Body, Error, Request, Response};
use serde_json::json;

use crate::state::AppState;

/// Entry point for every invocation: dispatches on HTTP method and renders
/// the outcome, including failures, as a JSON response.
pub(crate) async fn function_handler(
    state: &AppState,
    event: Request,
) -> Result<Response<Body>, Error> {
    let method = event.method().as_str();
    tracing::info!(method = %method, path = %event.uri().path(), "Handling request");

    let result = match method {
        "OPTIONS" => Ok(JsonResponse::ok(json!({}))),
        "GET" => items::get_items(state, &event).await,
        "POST" => items::create_item(state, &event).await,
        "PUT" => items::update_item(state, &event).await,
        "DELETE" => items::delete_item(state, &event).await,
        _ => Err(AppError::MethodNotAllowed),
    };

    Ok(render(result))
}

/// Renders a handler outcome. Falls back to a fixed 500 when the response
/// itself cannot be built, so the caller always gets JSON with CORS headers.
fn render(result: Result<JsonResponse, AppError>) -> Response<Body> {
    let rendered = match result {
        Ok(response) => response.into_response(),
        Err(err) => err.into_response(),
    };

    rendered.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to render response");
        response::internal_error()
    })
}
