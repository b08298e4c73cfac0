//! `GET /hello` greeting endpoint.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Content type emitted by JSON endpoints.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Body of the greeting response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

/// The fixed greeting. No inputs, no side effects.
pub fn greeting() -> Greeting {
    Greeting {
        message: "Hello, World!".to_string(),
    }
}

/// Handler for `GET /hello`.
///
/// Method filtering is left to the router.
pub async fn hello_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
        Json(greeting()),
    )
}
