//! REST client implementing the menu store port.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::ports::{MenuStorePort, StoreError};
use crate::domain::identifiers::MenuItemId;
use crate::domain::menu::{MenuDocument, MenuItemRecord};

use super::api_types::{
    CreateDocumentRequest, CreateDocumentResponse, ListDocumentsResponse, StoreApiErrorResponse,
};
use super::config::DocumentStoreConfig;

/// Document store client over the store's REST API.
///
/// One request per operation; failures map straight into [`StoreError`]
/// without retry, so transient and permanent failures look the same to
/// callers.
#[derive(Debug, Clone)]
pub struct RestMenuStore {
    client: Client,
    base_url: String,
    api_token: String,
    collection: String,
}

impl RestMenuStore {
    /// Create a new store client from config.
    pub fn new(config: &DocumentStoreConfig) -> Result<Self, StoreError> {
        if config.api_token.is_empty() {
            return Err(StoreError::Unauthorized);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            collection: config.collection.clone(),
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/v1/collections/{}/documents",
            self.base_url, self.collection
        )
    }

    /// Turn a non-success response into the matching [`StoreError`].
    async fn error_from_response(response: reqwest::Response) -> StoreError {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return StoreError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<StoreApiErrorResponse>(&body) {
            Ok(err) => StoreError::Api {
                code: err.code.unwrap_or_else(|| status.as_u16().to_string()),
                message: err.message,
            },
            Err(_) => StoreError::Api {
                code: status.as_u16().to_string(),
                message: body,
            },
        }
    }
}

#[async_trait]
impl MenuStorePort for RestMenuStore {
    async fn list_documents(&self) -> Result<Vec<MenuDocument>, StoreError> {
        let response = self
            .client
            .get(self.documents_url())
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| StoreError::Connection {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let listing: ListDocumentsResponse =
            response.json().await.map_err(|e| StoreError::Decode {
                message: e.to_string(),
            })?;

        Ok(listing
            .documents
            .into_iter()
            .map(|doc| MenuDocument {
                id: MenuItemId::new(doc.id),
                fields: doc.fields,
            })
            .collect())
    }

    async fn append_document(&self, record: MenuItemRecord) -> Result<MenuItemId, StoreError> {
        let body = CreateDocumentRequest { fields: record };

        let response = self
            .client
            .post(self.documents_url())
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Connection {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let created: CreateDocumentResponse =
            response.json().await.map_err(|e| StoreError::Decode {
                message: e.to_string(),
            })?;

        Ok(MenuItemId::new(created.id))
    }
}
