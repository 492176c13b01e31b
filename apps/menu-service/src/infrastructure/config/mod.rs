//! Service configuration.

mod settings;

pub use settings::{ConfigError, ServiceConfig};

pub use super::store::DocumentStoreConfig;
