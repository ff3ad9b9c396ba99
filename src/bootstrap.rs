//! Startup
//!
//! Reads the page configuration, adopts the items the server already
//! rendered and mounts the editor in their place.

use leptos::prelude::*;
use tracing::{error, info};
use wasm_bindgen::JsCast;

use flexible_content::{ConfigError, ContentArea, ItemFactory};

use crate::app::App;
use crate::dom;
use crate::notify;

fn load_factory() -> Result<ItemFactory, ConfigError> {
    dom::read_config()?.into_factory()
}

pub fn start() {
    let Some(doc) = dom::document() else {
        error!("no document to mount into");
        return;
    };
    let Some(container) = doc
        .get_element_by_id(dom::MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        error!("mount point #{} not found", dom::MOUNT_ID);
        return;
    };

    let factory = match load_factory() {
        Ok(factory) => factory,
        Err(e) => {
            notify::alert(&format!(
                "Sorry, something went wrong. Tell a developer that the content editor couldn't start: {}.",
                e
            ));
            return;
        }
    };

    let items = dom::adopt_items(&container);
    let area = ContentArea::with_items(factory, items);
    info!(
        types = area.registry().len(),
        items = area.items().len(),
        "mounting content editor"
    );

    leptos::mount::mount_to(container, move || view! { <App area=area /> }).forget();
}
