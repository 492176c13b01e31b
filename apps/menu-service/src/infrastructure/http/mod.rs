//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing the JSON endpoints that delegate to
//! application use cases.

mod auth;
mod controller;
mod request;
mod response;

pub use auth::{CALLER_UID_HEADER, caller_identity};
pub use controller::{AppState, create_router};
pub use request::*;
pub use response::*;
