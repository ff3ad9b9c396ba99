//! Editor State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The content
//! area is the single source of truth; the view is a projection of it.

use leptos::prelude::*;
use reactive_stores::Store;

use flexible_content::{ContentArea, DeleteState, Direction, FactoryError, Prefix};

#[derive(Clone, Debug, Store)]
pub struct EditorState {
    pub area: ContentArea,
}

/// Type alias for the store
pub type EditorStore = Store<EditorState>;

/// Get the editor store from context
pub fn use_editor_store() -> EditorStore {
    expect_context::<EditorStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Create an item of `type_id`. Subscribers are only notified when the
/// item was actually added. `None` means the store is gone.
pub fn store_create_item(store: &EditorStore, type_id: &str) -> Option<Result<Prefix, FactoryError>> {
    store.area().try_maybe_update(|area| {
        let result = area.create_item(type_id);
        (result.is_ok(), result)
    })
}

/// Move an item one step; returns whether it moved
pub fn store_move_item(store: &EditorStore, prefix: &Prefix, direction: Direction) -> bool {
    store
        .area()
        .try_maybe_update(|area| {
            let moved = area.move_item(prefix, direction);
            (moved, moved)
        })
        .unwrap_or(false)
}

/// Flip an item's soft-delete flag
pub fn store_toggle_deleted(store: &EditorStore, prefix: &Prefix) -> Option<DeleteState> {
    store
        .area()
        .try_maybe_update(|area| {
            let state = area.toggle_deleted(prefix);
            (state.is_some(), state)
        })
        .flatten()
}
