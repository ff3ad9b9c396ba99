//! UI Components
//!
//! Leptos components for the content area editor.

mod add_item_menu;
mod item_card;
mod item_list;

pub use add_item_menu::AddItemMenu;
pub use item_card::ItemCard;
pub use item_list::ItemList;
