//! Blocking Diagnostics
//!
//! Only for configuration errors the editor cannot work around.

/// Show a blocking alert and log it
pub fn alert(message: &str) {
    tracing::error!("{}", message);
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
