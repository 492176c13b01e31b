// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Menu Service - Rust Core Library
//!
//! Backend for the Mesa restaurant ordering application. Two operations are
//! exposed over HTTP/JSON: listing the menu collection and appending a menu
//! item for an authenticated caller. All persistence lives in an externally
//! managed document store; this service is a stateless mediator in front of
//! it.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: the Menu Item record and strongly typed identifiers
//! - **Application**: the `MenuStorePort` driven port, caller identity, and
//!   the `ListMenu` / `AddMenuItem` use cases
//! - **Infrastructure**: adapters
//!   - `http`: axum controller exposing the two operations
//!   - `store`: REST adapter for the managed document store
//!   - `persistence`: in-memory store for tests and development
//!   - `config`: environment-variable configuration
//!
//! # Error contract
//!
//! Failures never surface as HTTP faults. Every failure in a handler is
//! converted to an error-shaped JSON body (`{"error": "..."}`) with status
//! 200, and the underlying cause is logged for diagnostics.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core types with no infrastructure dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// Domain re-exports
pub use domain::identifiers::{CallerId, MenuItemId};
pub use domain::menu::{MenuDocument, MenuItemRecord, NewMenuItem};

// Application re-exports
pub use application::identity::CallerIdentity;
pub use application::ports::{MenuStorePort, StoreError};
pub use application::use_cases::{AddMenuItemError, AddMenuItemUseCase, ListMenuUseCase};

// Infrastructure re-exports
pub use infrastructure::config::{ConfigError, DocumentStoreConfig, ServiceConfig};
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryMenuStore;
pub use infrastructure::store::RestMenuStore;
