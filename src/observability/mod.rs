//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs → logging.rs (global tracing subscriber)
//! server.rs → TraceLayer (one span per request, access log)
//!           → x-request-id set and propagated on every response
//! ```

pub mod logging;

pub use logging::init_logging;
