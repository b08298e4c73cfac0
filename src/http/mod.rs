//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, ambient layers)
//!     → middleware/cors.rs (CORS headers, preflight short-circuit)
//!     → hello.rs (GET /hello) or the 404 fallback
//!     → Send to client
//! ```

pub mod hello;
pub mod middleware;
pub mod server;

pub use hello::{greeting, hello_handler, Greeting};
pub use server::{build_router, with_layers, HttpServer, X_REQUEST_ID};
