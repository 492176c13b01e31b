//! List Menu Use Case

use std::sync::Arc;

use crate::application::ports::{MenuStorePort, StoreError};
use crate::domain::menu::MenuDocument;

/// Use case for fetching the menu collection.
///
/// A pure read: no required input, no side effects beyond the store read.
pub struct ListMenuUseCase<S>
where
    S: MenuStorePort,
{
    store: Arc<S>,
}

impl<S> ListMenuUseCase<S>
where
    S: MenuStorePort,
{
    /// Create a new ListMenuUseCase.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case, returning every document in the collection.
    pub async fn execute(&self) -> Result<Vec<MenuDocument>, StoreError> {
        self.store.list_documents().await
    }
}
