//! Observability infrastructure for OpenShelf.
//!
//! Currently this covers structured logging only; request traces are
//! emitted by the HTTP layer through `tracing` spans.

pub mod logging;

pub use logging::{init_logging, LogFormat};
