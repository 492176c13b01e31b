//! Menu Store Port (Driven Port)
//!
//! Interface for the externally managed document store holding the menu
//! collection. The store owns all persisted records and assigns document
//! identifiers; this service never generates them for real adapters.

use async_trait::async_trait;

use crate::domain::identifiers::MenuItemId;
use crate::domain::menu::{MenuDocument, MenuItemRecord};

/// Store port error.
///
/// The distinctions exist for diagnostics only: at the handler boundary every
/// variant collapses to the same fixed user-facing error message.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Could not reach the store.
    #[error("store connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// The store rejected the request.
    #[error("store API error: {code} - {message}")]
    Api {
        /// Error code from the store.
        code: String,
        /// Error message from the store.
        message: String,
    },

    /// The store rejected this service's credentials.
    #[error("store rejected credentials")]
    Unauthorized,

    /// The store's response could not be decoded.
    #[error("store response decode error: {message}")]
    Decode {
        /// Error details.
        message: String,
    },
}

/// Port for document-store interactions on the menu collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuStorePort: Send + Sync {
    /// Fetch all documents in the menu collection.
    async fn list_documents(&self) -> Result<Vec<MenuDocument>, StoreError>;

    /// Append one record to the menu collection, returning the
    /// store-assigned identifier.
    async fn append_document(&self, record: MenuItemRecord) -> Result<MenuItemId, StoreError>;
}
