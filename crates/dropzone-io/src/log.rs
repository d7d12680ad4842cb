//! Browser console logging.
//!
//! Thin wrappers over `console.info` / `console.warn` with a fixed
//! `[dropzone]` prefix so uploader messages are easy to filter.

use dropzone_core::{Notification, Severity};
use wasm_bindgen::JsValue;

const PREFIX: &str = "[dropzone]";

/// Log an informational message.
pub fn info(message: &str) {
    web_sys::console::info_1(&JsValue::from_str(&format!("{PREFIX} {message}")));
}

/// Log a warning.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("{PREFIX} {message}")));
}

/// Log a toast as it is shown. Errors and warnings go to `console.warn`.
pub fn notification(notification: &Notification) {
    let line = format!(
        "{} notification: {}",
        notification.severity.as_str(),
        notification.message
    );
    match notification.severity {
        Severity::Error | Severity::Warning => warn(&line),
        Severity::Success | Severity::Info => info(&line),
    }
}
