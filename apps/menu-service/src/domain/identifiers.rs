//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(
    MenuItemId,
    "Store-assigned identifier for a menu item document."
);
define_id!(
    CallerId,
    "Identifier of an authenticated caller, as attached by the platform."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_id_new_and_display() {
        let id = MenuItemId::new("item-123");
        assert_eq!(id.as_str(), "item-123");
        assert_eq!(format!("{id}"), "item-123");
    }

    #[test]
    fn menu_item_id_generate_is_unique() {
        let id1 = MenuItemId::generate();
        let id2 = MenuItemId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn menu_item_id_equality() {
        let id1 = MenuItemId::new("item-123");
        let id2 = MenuItemId::new("item-123");
        let id3 = MenuItemId::new("item-456");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn menu_item_id_from_string() {
        let id: MenuItemId = "item-123".into();
        assert_eq!(id.as_str(), "item-123");

        let id: MenuItemId = String::from("item-456").into();
        assert_eq!(id.as_str(), "item-456");
    }

    #[test]
    fn caller_id_new() {
        let id = CallerId::new("uid-abc");
        assert_eq!(id.as_str(), "uid-abc");
    }

    #[test]
    fn serde_roundtrip() {
        let id = MenuItemId::new("item-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"item-123\"");

        let parsed: MenuItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn hash_works_for_collections() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(MenuItemId::new("item-1"));
        set.insert(MenuItemId::new("item-2"));
        set.insert(MenuItemId::new("item-1")); // duplicate

        assert_eq!(set.len(), 2);
    }
}
