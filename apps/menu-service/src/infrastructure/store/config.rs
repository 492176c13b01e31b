//! Document store client configuration.

use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the document store REST client.
#[derive(Clone)]
pub struct DocumentStoreConfig {
    /// Base URL of the store API, without trailing slash.
    pub base_url: String,
    /// Bearer token authenticating this service to the store.
    pub api_token: String,
    /// Name of the collection holding menu items.
    pub collection: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DocumentStoreConfig {
    /// Create a config with the default timeout.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            collection: collection.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for DocumentStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentStoreConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .field("collection", &self.collection)
            .field("timeout", &self.timeout)
            .finish()
    }
}
