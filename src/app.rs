//! Content Area Editor App
//!
//! Item count, the hidden prefix list, the items and the add menu.

use leptos::prelude::*;
use reactive_stores::Store;

use flexible_content::{ContentArea, PREFIXES_FIELD};

use crate::components::{AddItemMenu, ItemList};
use crate::store::{EditorState, EditorStateStoreFields};

#[component]
pub fn App(area: ContentArea) -> impl IntoView {
    let store = Store::new(EditorState { area });

    // Provide the store to all children
    provide_context(store);

    let count = move || store.area().read().metadata().count;
    let prefix_list = move || store.area().read().metadata().prefix_list.as_str().to_string();

    view! {
        <div class="fc-area">
            <p class="fc-item-count">
                <span class="fc-item-counter">{count}</span>
                {move || if count() == 1 { " item" } else { " items" }}
            </p>
            <input type="hidden" class="fc-prefixes" name=PREFIXES_FIELD prop:value=prefix_list />
            <ItemList />
            <AddItemMenu />
        </div>
    }
}
