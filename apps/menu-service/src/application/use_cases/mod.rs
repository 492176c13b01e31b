//! Application Use Cases
//!
//! One use case per externally invocable operation.

mod add_menu_item;
mod list_menu;

pub use add_menu_item::{AddMenuItemError, AddMenuItemUseCase};
pub use list_menu::ListMenuUseCase;
