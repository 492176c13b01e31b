//! Domain Layer
//!
//! The innermost layer: the Menu Item record and its identifiers, with zero
//! infrastructure dependencies. Persistence abstractions live in the
//! application layer's ports and are implemented by adapters.

pub mod identifiers;
pub mod menu;
