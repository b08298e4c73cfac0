//! Quizap backend library.
//!
//! A small Axum service exposing `GET /hello` behind a permissive CORS
//! middleware meant for local development.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ TcpListener ──▶ ambient layers ──▶ CORS middleware ──▶ router
//!                                (request id,        (preflight → 204)    ├─ GET /hello
//!                                 trace, panic,                           └─ 404 fallback
//!                                 timeout)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
