//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::menu::NewMenuItem;

/// Request to add a menu item.
///
/// Only JSON typing is enforced here; the service performs no range or
/// emptiness validation on name and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMenuItemRequest {
    /// Display name of the item.
    pub name: String,
    /// Price of the item.
    pub price: Decimal,
    /// Optional description; defaults to empty when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AddMenuItemRequest {
    /// Convert into the domain input type.
    #[must_use]
    pub fn into_new_item(self) -> NewMenuItem {
        NewMenuItem {
            name: self.name,
            price: self.price,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn description_is_optional() {
        let json = r#"{"name": "Burger", "price": 9.5}"#;
        let req: AddMenuItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.name, "Burger");
        assert_eq!(req.price, dec!(9.5));
        assert!(req.description.is_none());
    }

    #[test]
    fn explicit_description_is_kept() {
        let json = r#"{"name": "Burger", "price": 9.5, "description": "With fries"}"#;
        let req: AddMenuItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.description.as_deref(), Some("With fries"));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let json = r#"{"name": "Burger", "price": "cheap"}"#;
        assert!(serde_json::from_str::<AddMenuItemRequest>(json).is_err());
    }
}
