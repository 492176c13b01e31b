//! Add Menu Item Use Case

use std::sync::Arc;

use chrono::Utc;

use crate::application::identity::CallerIdentity;
use crate::application::ports::{MenuStorePort, StoreError};
use crate::domain::identifiers::MenuItemId;
use crate::domain::menu::NewMenuItem;

/// Failure modes of the add operation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AddMenuItemError {
    /// The caller carried no verified identity.
    #[error("caller is not authenticated")]
    Unauthenticated,

    /// The store write failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case for appending a menu item to the collection.
///
/// The identity requirement is checked before anything touches the store: an
/// unauthenticated call performs no write.
pub struct AddMenuItemUseCase<S>
where
    S: MenuStorePort,
{
    store: Arc<S>,
}

impl<S> AddMenuItemUseCase<S>
where
    S: MenuStorePort,
{
    /// Create a new AddMenuItemUseCase.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Execute the use case, returning the store-assigned identifier.
    pub async fn execute(
        &self,
        caller: Option<&CallerIdentity>,
        item: NewMenuItem,
    ) -> Result<MenuItemId, AddMenuItemError> {
        let Some(caller) = caller else {
            return Err(AddMenuItemError::Unauthenticated);
        };

        let record = item.into_record(Utc::now());

        tracing::debug!(
            caller = %caller.uid,
            name = %record.name,
            "Appending menu item"
        );

        let id = self.store.append_document(record).await?;
        Ok(id)
    }
}
