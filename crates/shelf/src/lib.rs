//! # Shelf Crate
//!
//! This crate provides the domain layer for the OpenShelf demonstration API.
//!
//! ## Key Components
//!
//! - **Domain Types**: `Item`, `ItemRecord`, `ModelName`
//! - **Fixed State**: `ItemShelf`, the read-only item list seeded at startup
//! - **HTTP API**: Axum models, extractors, handlers, and routes
//!
//! ## Architecture
//!
//! Every handler is a pure function from a parsed request to a response.
//! The only shared state is the `ItemShelf`, built once at process start
//! and passed by read-only reference into handlers. Input validation lives
//! in the extractor layer; a request that fails its declared types is
//! answered before any handler body runs.

pub mod api;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use store::ItemShelf;
pub use types::{Item, ItemRecord, ModelName};
