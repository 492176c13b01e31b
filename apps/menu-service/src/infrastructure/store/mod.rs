//! Document store adapter (Driven Adapter)
//!
//! REST client for the externally managed document store that owns the menu
//! collection. Per the service's error contract there is no retry here: each
//! operation issues exactly one request, and any failure is mapped into a
//! [`StoreError`](crate::application::ports::StoreError) for logging.

mod api_types;
mod client;
mod config;

pub use client::RestMenuStore;
pub use config::DocumentStoreConfig;
