//! DOM Access
//!
//! Everything that reads from or writes to the host page outside of the
//! Leptos view tree: configuration, server-rendered items, click
//! delegation and cleanup of item markup.

use std::collections::BTreeMap;

use flexible_content::{ConfigError, ContentItem, FlexibleContentConfig, ItemCollection, Prefix, DELETED_CLASS};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};

/// Element the editor mounts into; server-rendered items live inside it
pub const MOUNT_ID: &str = "fc-editor";
/// `<script type="application/json">` holding the configuration
pub const CONFIG_SCRIPT_ID: &str = "fc-config";

const ITEM_SELECTOR: &str = ".fc-item";
const PREFIX_ATTR: &str = "data-form-prefix";
const TYPE_ATTR: &str = "data-type-slug";
const LEGACY_TEMPLATES: &str = "fcFormTemplates";
const LEGACY_PLACEHOLDER: &str = "fcFormPrefixPlaceholder";
/// Header controls an item's own markup may carry; the card renders its own
const CONTROL_SELECTOR: &str = ".fc-item-header, .fc-move-up, .fc-move-down, .fc-delete";
const ORDERING_CLASS: &str = "fc-ordering";
const BOOKKEEPING_FIELDS: &[&str] = &["ordering", "delete"];

/// What a click inside the item list asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    MoveUp,
    MoveDown,
    ToggleDelete,
}

const ACTIONS: &[(&str, ItemAction)] = &[
    (".fc-move-up", ItemAction::MoveUp),
    (".fc-move-down", ItemAction::MoveDown),
    (".fc-delete", ItemAction::ToggleDelete),
];

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

/// Configuration from the JSON script, falling back to the legacy globals
pub fn read_config() -> Result<FlexibleContentConfig, ConfigError> {
    let doc = document().ok_or_else(|| ConfigError::Missing("no document".to_string()))?;
    if let Some(script) = doc.get_element_by_id(CONFIG_SCRIPT_ID) {
        let json = script.text_content().unwrap_or_default();
        debug!(bytes = json.len(), "reading #{}", CONFIG_SCRIPT_ID);
        return FlexibleContentConfig::from_json(&json);
    }
    read_legacy_globals()
}

fn read_legacy_globals() -> Result<FlexibleContentConfig, ConfigError> {
    let win = web_sys::window().ok_or_else(|| ConfigError::Missing("no window".to_string()))?;
    let templates = js_sys::Reflect::get(&win, &JsValue::from_str(LEGACY_TEMPLATES))
        .map_err(|_| ConfigError::InvalidGlobals(format!("window.{} is not readable", LEGACY_TEMPLATES)))?;
    if templates.is_undefined() || templates.is_null() {
        return Err(ConfigError::Missing(format!(
            "neither #{} nor window.{} is present",
            CONFIG_SCRIPT_ID, LEGACY_TEMPLATES
        )));
    }
    let templates: BTreeMap<String, String> = serde_wasm_bindgen::from_value(templates)
        .map_err(|e| ConfigError::InvalidGlobals(format!("window.{}: {}", LEGACY_TEMPLATES, e)))?;
    let placeholder = js_sys::Reflect::get(&win, &JsValue::from_str(LEGACY_PLACEHOLDER))
        .ok()
        .and_then(|v| v.as_string());

    warn!("using legacy window.{} configuration", LEGACY_TEMPLATES);
    Ok(FlexibleContentConfig::from_legacy(templates, placeholder))
}

pub fn has_class(class_name: &str, class: &str) -> bool {
    class_name.split_whitespace().any(|c| c == class)
}

/// Take over the items the server rendered inside `container`, in document
/// order, and clear them out so the editor can render its own.
pub fn adopt_items(container: &web_sys::Element) -> ItemCollection {
    let Ok(nodes) = container.query_selector_all(ITEM_SELECTOR) else {
        return ItemCollection::new();
    };

    let mut items = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let Some(prefix) = el.get_attribute(PREFIX_ATTR).filter(|p| !p.is_empty()) else {
            warn!("skipping {} without {}", ITEM_SELECTOR, PREFIX_ATTR);
            continue;
        };
        let deleted = has_class(&el.class_name(), DELETED_CLASS);
        items.push(ContentItem::adopted(
            Prefix::new(prefix),
            el.get_attribute(TYPE_ATTR),
            el.inner_html(),
            deleted,
        ));
    }

    container.set_inner_html("");
    debug!(count = items.len(), "adopted server-rendered items");
    items.into_iter().collect()
}

/// Resolve a click somewhere inside the list to an action on one item
pub fn action_for_click(target: &web_sys::Element) -> Option<(ItemAction, Prefix)> {
    for (selector, action) in ACTIONS {
        if let Ok(Some(trigger)) = target.closest(selector) {
            let item = trigger.closest(ITEM_SELECTOR).ok()??;
            let prefix = item.get_attribute(PREFIX_ATTR)?;
            return Some((*action, Prefix::new(prefix)));
        }
    }
    None
}

/// Whether an input in an item's markup duplicates one of the bookkeeping
/// fields the card header submits. Matched on the `name` attribute so any
/// prefix works, whatever characters it contains.
pub fn is_bookkeeping_input(prefix: &Prefix, name: Option<&str>, class_name: &str) -> bool {
    if has_class(class_name, ORDERING_CLASS) {
        return true;
    }
    name.is_some_and(|name| BOOKKEEPING_FIELDS.iter().any(|field| prefix.field(field) == name))
}

/// Drop the controls and bookkeeping inputs that templates and adopted
/// markup bring along, leaving only the payload fields.
pub fn strip_bookkeeping(body: &web_sys::Element, prefix: &Prefix) {
    remove_all(body, CONTROL_SELECTOR, |_| true);
    remove_all(body, "input", |el| {
        is_bookkeeping_input(prefix, el.get_attribute("name").as_deref(), &el.class_name())
    });
}

fn remove_all(root: &web_sys::Element, selector: &str, matches: impl Fn(&web_sys::Element) -> bool) {
    let Ok(nodes) = root.query_selector_all(selector) else {
        warn!(selector, "bad selector");
        return;
    };
    for i in 0..nodes.length() {
        if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            if matches(&el) {
                el.remove();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_class() {
        assert!(has_class("fc-item fc-deleted", DELETED_CLASS));
        assert!(!has_class("fc-item fc-deleted-soon", DELETED_CLASS));
        assert!(!has_class("", DELETED_CLASS));
    }

    #[test]
    fn test_bookkeeping_inputs_matched_by_name() {
        let prefix = Prefix::from("fc-item-1");
        assert!(is_bookkeeping_input(&prefix, Some("fc-item-1-ordering"), ""));
        assert!(is_bookkeeping_input(&prefix, Some("fc-item-1-delete"), ""));
        assert!(is_bookkeeping_input(&prefix, None, "fc-ordering"));
        assert!(!is_bookkeeping_input(&prefix, Some("fc-item-1-video_id"), ""));
        assert!(!is_bookkeeping_input(&prefix, Some("fc-item-10-ordering"), ""));
        assert!(!is_bookkeeping_input(&prefix, None, "fc-ordering-hint"));
    }

    #[test]
    fn test_bookkeeping_inputs_with_quoted_prefix() {
        let prefix = Prefix::from("legacy\"item\\2");
        assert!(is_bookkeeping_input(&prefix, Some("legacy\"item\\2-ordering"), ""));
        assert!(!is_bookkeeping_input(&prefix, Some("legacy\"item\\2-text"), ""));
    }
}
