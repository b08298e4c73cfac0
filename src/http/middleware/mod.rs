//! Request interceptors composed ahead of the route handlers.

pub mod cors;

pub use cors::{insecure_cors_allow_all, CORS_HEADERS};
