//! Item List Component
//!
//! Renders items in document order. A single click listener on the
//! container handles every item's move and delete controls, including
//! ones that live inside server-provided templates.

use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;

use flexible_content::Direction;

use crate::components::ItemCard;
use crate::dom::{self, ItemAction};
use crate::store::{store_move_item, store_toggle_deleted, use_editor_store, EditorStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_editor_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Some((action, prefix)) = dom::action_for_click(&target) else {
            return;
        };
        ev.prevent_default();

        match action {
            ItemAction::MoveUp => {
                let moved = store_move_item(&store, &prefix, Direction::Up);
                debug!(prefix = prefix.as_str(), moved, "move up");
            }
            ItemAction::MoveDown => {
                let moved = store_move_item(&store, &prefix, Direction::Down);
                debug!(prefix = prefix.as_str(), moved, "move down");
            }
            ItemAction::ToggleDelete => {
                let state = store_toggle_deleted(&store, &prefix);
                debug!(prefix = prefix.as_str(), ?state, "toggle delete");
            }
        }
    };

    let prefixes = move || {
        store
            .area()
            .read()
            .items()
            .prefixes()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="fc-items" on:click=on_click>
            <For
                each=prefixes
                key=|prefix| prefix.clone()
                children=move |prefix| view! { <ItemCard prefix=prefix /> }
            />
        </div>
    }
}
