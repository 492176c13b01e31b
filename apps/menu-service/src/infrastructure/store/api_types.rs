//! Wire types of the document store's REST API.

use serde::{Deserialize, Serialize};

use crate::domain::menu::MenuItemRecord;

/// A document resource as the store returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResource {
    /// Store-assigned document identifier.
    pub id: String,
    /// The document's fields.
    pub fields: MenuItemRecord,
}

/// Response to listing a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDocumentsResponse {
    /// Documents in store order.
    pub documents: Vec<DocumentResource>,
}

/// Body for creating a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    /// The fields to store.
    pub fields: MenuItemRecord,
}

/// Response to creating a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentResponse {
    /// Store-assigned identifier of the new document.
    pub id: String,
}

/// Error body the store returns on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreApiErrorResponse {
    /// Machine-readable error code, when the store supplies one.
    pub code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_parses_documents() {
        let json = r#"{
            "documents": [
                {"id": "m1", "fields": {"name": "Soup", "price": 4.0}},
                {"id": "m2", "fields": {"name": "Salad", "price": 6.5, "description": "House"}}
            ]
        }"#;

        let parsed: ListDocumentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.documents.len(), 2);
        assert_eq!(parsed.documents[0].id, "m1");
        assert_eq!(parsed.documents[1].fields.description, "House");
    }

    #[test]
    fn error_response_tolerates_missing_fields() {
        let parsed: StoreApiErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.code.is_none());
        assert!(parsed.message.is_empty());
    }
}
