//! Toast notification.

use dioxus::prelude::*;
use dropzone_core::Severity;

/// Props for the [`Toast`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    /// Text to show.
    message: String,
    /// Selects the color.
    severity: Severity,
}

/// Fixed-position notification in the top-right corner.
#[component]
pub fn Toast(props: ToastProps) -> Element {
    let kind = props.severity.as_str();
    let live = match props.severity {
        Severity::Error | Severity::Warning => "assertive",
        Severity::Success | Severity::Info => "polite",
    };

    rsx! {
        div {
            class: "notification notification-{kind}",
            role: "status",
            aria_live: live,
            "{props.message}"
        }
    }
}
