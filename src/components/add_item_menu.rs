//! Add Item Menu Component
//!
//! One add link per registered item type, in registration order.

use leptos::prelude::*;
use tracing::info;

use crate::markdown::render_description;
use crate::notify;
use crate::store::{store_create_item, use_editor_store, EditorStateStoreFields, EditorStore};

/// Append an item of `type_id`, alerting on configuration errors
fn add_item(store: &EditorStore, type_id: &str) {
    match store_create_item(store, type_id) {
        Some(Ok(prefix)) => info!(type_id, prefix = prefix.as_str(), "item added"),
        Some(Err(e)) => notify::alert(&e.user_message()),
        None => {}
    }
}

#[component]
pub fn AddItemMenu() -> impl IntoView {
    let store = use_editor_store();

    let types: Vec<(String, String, String)> = store
        .area()
        .read_untracked()
        .registry()
        .iter()
        .map(|t| (t.slug.clone(), t.name.clone(), render_description(&t.description)))
        .collect();

    view! {
        <div class="fc-add-item">
            <span class="fc-add-label">"Add content:"</span>
            <ul class="fc-item-types">
                {types.into_iter().map(|(slug, name, help)| {
                    let slug_attr = slug.clone();
                    view! {
                        <li>
                            <a
                                href="#"
                                data-type-slug=slug_attr
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    add_item(&store, &slug);
                                }
                            >
                                {name}
                            </a>
                            <div class="fc-item-type-help" inner_html=help></div>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
