//! In-memory menu store for testing.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{MenuStorePort, StoreError};
use crate::domain::identifiers::MenuItemId;
use crate::domain::menu::{MenuDocument, MenuItemRecord};

/// In-memory implementation of `MenuStorePort`.
///
/// Preserves insertion order and assigns UUID identifiers on append.
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    documents: RwLock<Vec<MenuDocument>>,
}

impl InMemoryMenuStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.read().unwrap().is_empty()
    }

    /// Clear all documents from the store.
    pub fn clear(&self) {
        let mut documents = self.documents.write().unwrap();
        documents.clear();
    }

    /// Add a document with a known identifier (for test setup).
    pub fn add(&self, document: MenuDocument) {
        let mut documents = self.documents.write().unwrap();
        documents.push(document);
    }
}

#[async_trait]
impl MenuStorePort for InMemoryMenuStore {
    async fn list_documents(&self) -> Result<Vec<MenuDocument>, StoreError> {
        let documents = self.documents.read().unwrap();
        Ok(documents.clone())
    }

    async fn append_document(&self, record: MenuItemRecord) -> Result<MenuItemId, StoreError> {
        let id = MenuItemId::generate();
        let mut documents = self.documents.write().unwrap();
        documents.push(MenuDocument {
            id: id.clone(),
            fields: record,
        });
        Ok(id)
    }
}
