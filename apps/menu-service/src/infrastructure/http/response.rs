//! HTTP response DTOs.
//!
//! The four message strings below are wire contract: clients match on them
//! verbatim and check for the presence of an `error` field rather than
//! looking at HTTP status codes.

use serde::{Deserialize, Serialize};

use crate::domain::identifiers::MenuItemId;
use crate::domain::menu::MenuItemRecord;

/// Error body when the menu collection could not be read.
pub const FETCH_MENU_FAILED: &str = "Failed to fetch menu items.";

/// Error body when the caller carried no verified identity.
pub const AUTH_REQUIRED: &str = "You must be authenticated to add items.";

/// Success message after appending a menu item.
pub const ITEM_ADDED: &str = "Item added successfully";

/// Error body when the append failed.
pub const ADD_ITEM_FAILED: &str = "Failed to add menu item.";

/// One listed menu item: the store-assigned identifier merged with the
/// stored fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemResponse {
    /// Store-assigned identifier.
    pub id: MenuItemId,
    /// The stored fields, flattened alongside the identifier.
    #[serde(flatten)]
    pub fields: MenuItemRecord,
}

/// Response from the list operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListMenuResponse {
    /// Every item in the collection, in store order.
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItemResponse>,
}

/// Response from a successful add operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMenuItemResponse {
    /// Fixed success message.
    pub message: String,
    /// Store-assigned identifier of the new item.
    pub id: MenuItemId,
}

/// Error-shaped result body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Fixed user-facing message for the failed operation.
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body from one of the fixed messages.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, name: &str) -> MenuItemResponse {
        MenuItemResponse {
            id: MenuItemId::new(id),
            fields: MenuItemRecord {
                name: name.to_string(),
                price: dec!(9.5),
                description: String::new(),
                created_at: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    #[test]
    fn list_response_uses_menu_items_key() {
        let resp = ListMenuResponse {
            menu_items: vec![],
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"menuItems":[]}"#);
    }

    #[test]
    fn item_response_merges_id_with_fields() {
        let json = serde_json::to_value(item("item-1", "Burger")).unwrap();

        assert_eq!(json.get("id").unwrap(), "item-1");
        assert_eq!(json.get("name").unwrap(), "Burger");
        assert_eq!(json.get("price").unwrap(), 9.5);
        assert_eq!(json.get("description").unwrap(), "");
        assert!(json.get("fields").is_none()); // Flattened, not nested
    }

    #[test]
    fn add_response_shape() {
        let resp = AddMenuItemResponse {
            message: ITEM_ADDED.to_string(),
            id: MenuItemId::new("item-1"),
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json.get("message").unwrap(), "Item added successfully");
        assert_eq!(json.get("id").unwrap(), "item-1");
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::new(AUTH_REQUIRED)).unwrap();
        assert_eq!(
            json.get("error").unwrap(),
            "You must be authenticated to add items."
        );
    }
}
