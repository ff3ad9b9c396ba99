//! Flexible Content Editor Entry Point

mod app;
mod bootstrap;
mod components;
mod dom;
mod logging;
mod markdown;
mod notify;
mod store;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    bootstrap::start();
}
