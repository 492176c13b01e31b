//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems this application uses.
//! The only driven port is the document-store client; its adapters live in
//! the infrastructure layer.

mod menu_store;

pub use menu_store::{MenuStorePort, StoreError};

#[cfg(test)]
pub use menu_store::MockMenuStorePort;
