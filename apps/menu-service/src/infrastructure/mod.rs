//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - **Driven Adapters (Outbound)**:
//!   - `store/`: REST client for the managed document store
//!   - `persistence/`: in-memory store for tests and development
//! - **Driver Adapters (Inbound)**:
//!   - `http/`: axum controller exposing the two menu operations
//! - **Cross-cutting**:
//!   - `config/`: environment-variable configuration

pub mod config;
pub mod http;
pub mod persistence;
pub mod store;
