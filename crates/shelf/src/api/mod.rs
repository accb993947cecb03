//! HTTP API for the shelf.
//!
//! ## Modules
//!
//! - `extract` - extractors that answer bad inputs with structured 422s
//! - `handlers` - direct HTTP handlers
//! - `models` - request/response types
//! - `routes` - Axum router

pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::shelf_routes;
