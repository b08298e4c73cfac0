//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (CORS, tracing, panic recovery, timeout, request ID)
//! - Bind server to listener
//! - Stop on OS signal or shutdown broadcast

use axum::{
    http::{header, HeaderName, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::hello::hello_handler;
use crate::http::middleware::insecure_cors_allow_all;
use crate::lifecycle::signals::shutdown_signal;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// HTTP server for the backend.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once an OS shutdown signal arrives or `shutdown` fires, after
    /// in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let stop = async move {
            tokio::select! {
                _ = shutdown_signal() => {}
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown requested");
                }
            }
        };

        axum::serve(listener, self.router)
            .with_graceful_shutdown(stop)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &ServerConfig) -> Router {
    let routes = Router::new()
        // HEAD is listed so it does not fall back to the GET handler.
        .route(
            "/hello",
            get(hello_handler).head(not_found).fallback(not_found),
        )
        .fallback(not_found);

    with_layers(routes, config)
}

/// Wrap routes in the middleware stack.
///
/// CORS sits outside panic recovery and the timeout, so 500 and 408 responses
/// carry the CORS headers too. It wraps the fallbacks, so unmatched requests
/// get them as well and preflights never reach a handler.
#[allow(deprecated)]
pub fn with_layers(routes: Router, config: &ServerConfig) -> Router {
    let recovery = ServiceBuilder::new()
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )));

    let correlation = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID));

    routes
        .layer(recovery)
        .layer(middleware::from_fn(insecure_cors_allow_all))
        .layer(correlation)
}

/// 404 for unknown paths and for methods a path does not register.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "404 page not found",
    )
}
