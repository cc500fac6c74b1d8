//! JSON response formatting shared by every handler.

use lambda_http::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Error, Response};
use serde_json::Value;

/// Headers sent on every response, success or failure.
pub const RESPONSE_HEADERS: [(&str, &str); 4] = [
    ("Content-Type", "application/json"),
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Methods",
        "GET, POST, PUT, DELETE, OPTIONS",
    ),
    (
        "Access-Control-Allow-Headers",
        "Content-Type, Authorization",
    ),
];

/// A status code and JSON body, not yet rendered into an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: u16,
    pub body: Value,
}

impl JsonResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    pub fn created(body: Value) -> Self {
        Self::new(201, body)
    }

    /// Renders the response with the CORS header set.
    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let body = serde_json::to_string(&self.body)?;
        let builder = RESPONSE_HEADERS
            .iter()
            .fold(Response::builder().status(self.status), |builder, (name, value)| {
                builder.header(*name, *value)
            });
        Ok(builder.body(Body::Text(body))?)
    }
}

/// Fixed 500 response used when a response cannot be rendered. Built
/// without any fallible step.
pub fn internal_error() -> Response<Body> {
    let mut response = Response::new(Body::Text(
        r#"{"error":"Internal server error"}"#.to_string(),
    ));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;

    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(RESPONSE_HEADERS[0].1));
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(RESPONSE_HEADERS[1].1),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(RESPONSE_HEADERS[2].1),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(RESPONSE_HEADERS[3].1),
    );
    response
}
