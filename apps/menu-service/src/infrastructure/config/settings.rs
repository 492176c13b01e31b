//! Service Configuration Settings
//!
//! Configuration for the menu service, loaded from environment variables.

use std::time::Duration;

use crate::infrastructure::store::DocumentStoreConfig;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default menu collection name.
const DEFAULT_COLLECTION: &str = "menu";

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// HTTP server port.
    pub http_port: u16,
    /// Document store client configuration.
    pub store: DocumentStoreConfig,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing or
    /// empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("MENU_STORE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("MENU_STORE_URL".to_string()))?;

        let api_token = std::env::var("MENU_STORE_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("MENU_STORE_TOKEN".to_string()))?;

        if base_url.is_empty() {
            return Err(ConfigError::EmptyValue("MENU_STORE_URL".to_string()));
        }

        if api_token.is_empty() {
            return Err(ConfigError::EmptyValue("MENU_STORE_TOKEN".to_string()));
        }

        let collection =
            std::env::var("MENU_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

        let http_port = parse_env_u16("HTTP_PORT", DEFAULT_HTTP_PORT);

        let mut store = DocumentStoreConfig::new(base_url, api_token, collection);
        if let Some(timeout) = parse_env_duration_secs("MENU_STORE_TIMEOUT_SECS") {
            store = store.with_timeout(timeout);
        }

        Ok(Self { http_port, store })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

fn parse_env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_duration_secs(key: &str) -> Option<Duration> {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_u16_falls_back_to_default() {
        assert_eq!(parse_env_u16("MENU_TEST_UNSET_PORT", 8080), 8080);
    }

    #[test]
    fn parse_env_duration_absent_is_none() {
        assert!(parse_env_duration_secs("MENU_TEST_UNSET_TIMEOUT").is_none());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::MissingEnvVar("MENU_STORE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "missing required environment variable: MENU_STORE_URL"
        );

        let err = ConfigError::EmptyValue("MENU_STORE_TOKEN".to_string());
        assert_eq!(
            err.to_string(),
            "environment variable MENU_STORE_TOKEN cannot be empty"
        );
    }
}
