//! Menu Item record types.
//!
//! A menu item is a document owned by the external store. The service only
//! ever sees it in two shapes: the fields of a stored document
//! ([`MenuItemRecord`]) paired with its store-assigned identifier
//! ([`MenuDocument`]), and the caller-supplied input for a new item
//! ([`NewMenuItem`]).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::identifiers::MenuItemId;

/// The stored fields of a menu item document.
///
/// Documents may carry fields beyond the ones this service writes; those are
/// captured in `extra` and carried through listing verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    /// Display name of the item.
    pub name: String,
    /// Price of the item.
    pub price: Decimal,
    /// Free-form description. Empty when the caller supplied none.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp. Absent on documents written by older tooling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Any further stored fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A stored document: identifier paired with its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    /// Store-assigned identifier.
    pub id: MenuItemId,
    /// The stored fields.
    pub fields: MenuItemRecord,
}

/// Caller-supplied input for a new menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    /// Display name of the item.
    pub name: String,
    /// Price of the item.
    pub price: Decimal,
    /// Optional description.
    pub description: Option<String>,
}

impl NewMenuItem {
    /// Build the normalized record to append to the store.
    ///
    /// The description defaults to the empty string when absent; the creation
    /// timestamp is stamped by the caller so the domain stays clock-free.
    #[must_use]
    pub fn into_record(self, created_at: DateTime<Utc>) -> MenuItemRecord {
        MenuItemRecord {
            name: self.name,
            price: self.price,
            description: self.description.unwrap_or_default(),
            created_at: Some(created_at),
            extra: serde_json::Map::new(),
        }
    }
}
