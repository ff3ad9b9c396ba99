//! Item Card Component
//!
//! One content item: header controls plus the item's own form markup.

use leptos::html::Div;
use leptos::prelude::*;

use flexible_content::{DeleteState, Prefix, DELETED_CLASS};

use crate::dom;
use crate::store::{use_editor_store, EditorStateStoreFields};

/// CSS classes for an item in the given delete state
pub fn item_class(state: DeleteState) -> String {
    if state.is_deleted() {
        format!("fc-item {}", DELETED_CLASS)
    } else {
        "fc-item".to_string()
    }
}

/// Text of the delete link
pub fn delete_label(state: DeleteState) -> &'static str {
    match state {
        DeleteState::Active => "Delete",
        DeleteState::MarkedDeleted => "Wait! Don't delete this!",
    }
}

/// A single item in the list. Clicks on its controls are handled by the
/// list's delegated listener, not here.
#[component]
pub fn ItemCard(prefix: Prefix) -> impl IntoView {
    let store = use_editor_store();
    let body_ref = NodeRef::<Div>::new();

    // Markup and type are fixed at creation; read them once
    let (type_slug, type_name, markup) = {
        let area = store.area().read_untracked();
        let item = area.item(&prefix);
        let type_slug = item.and_then(|i| i.type_id()).map(str::to_string);
        let type_name = type_slug
            .as_deref()
            .and_then(|slug| area.registry().get(slug))
            .map(|t| t.name.clone())
            .unwrap_or_default();
        let markup = item.map(|i| i.markup().to_string()).unwrap_or_default();
        (type_slug, type_name, markup)
    };

    let key = prefix.clone();
    let ordering = Memo::new(move |_| {
        store.area().read().item(&key).map(|i| i.ordering()).unwrap_or_default()
    });
    let key = prefix.clone();
    let delete_state = Memo::new(move |_| {
        store.area().read().item(&key).map(|i| i.delete_state()).unwrap_or_default()
    });

    // Templates and adopted markup may carry their own controls; the
    // header below is the only place bookkeeping fields are submitted from
    let key = prefix.clone();
    Effect::new(move |_| {
        if let Some(body) = body_ref.get() {
            dom::strip_bookkeeping(&body, &key);
        }
    });

    view! {
        <div
            class=move || item_class(delete_state.get())
            data-form-prefix=prefix.to_string()
            data-type-slug=type_slug
        >
            <div class="fc-item-header">
                <span class="fc-item-ordering">{move || ordering.get()}</span>
                <span class="fc-item-type">{type_name}</span>
                <input
                    type="hidden"
                    class="fc-ordering"
                    name=prefix.field("ordering")
                    prop:value=move || ordering.get().to_string()
                />
                <a href="#" class="fc-move-up" title="Move up">"▲"</a>
                <a href="#" class="fc-move-down" title="Move down">"▼"</a>
                <a href="#" class="fc-delete">
                    <span>{move || delete_label(delete_state.get())}</span>
                    <input
                        type="hidden"
                        name=prefix.field("delete")
                        prop:value=move || delete_state.get().field_value()
                    />
                </a>
            </div>
            <div node_ref=body_ref class="fc-item-body" inner_html=markup></div>
        </div>
    }
}
