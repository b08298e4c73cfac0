//! Permissive CORS middleware for local development.
//!
//! Allows every origin and also advertises credentials. Browsers refuse to
//! honour credentials against a wildcard origin, so this policy is unsuitable
//! for production. `tower_http::cors::CorsLayer` rejects the same combination,
//! hence the hand-written interceptor.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Headers attached to every response passing through the middleware.
pub const CORS_HEADERS: [(HeaderName, &str); 5] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With",
    ),
    (
        header::ACCESS_CONTROL_ALLOW_METHODS,
        "POST, OPTIONS, GET, PUT, DELETE",
    ),
    // 24 hours
    (header::ACCESS_CONTROL_MAX_AGE, "86400"),
];

/// Allow all origins. Preflight requests end here with 204.
///
/// Other requests run the rest of the chain. Headers count as set before the
/// downstream handler ran, so a handler that sets one of them explicitly keeps
/// its own value.
pub async fn insecure_cors_allow_all(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        tracing::trace!(path = %req.uri().path(), "Answering preflight request");
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut());
    response
}

/// Insert the CORS headers that are not already present.
fn apply_cors_headers(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS {
        headers
            .entry(name)
            .or_insert_with(|| HeaderValue::from_static(value));
    }
}
