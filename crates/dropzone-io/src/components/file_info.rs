//! Panel describing the selected file, with its preview and remove button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdX};
use dropzone_core::Preview;

use super::preview::InlinePreview;

/// Props for the [`FileInfo`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileInfoProps {
    /// File name.
    name: String,
    /// Human-readable file size.
    size: String,
    /// Whether a preview read is outstanding.
    loading_preview: bool,
    /// The ready preview, if any.
    preview: Option<Preview>,
    /// Whether the file can still be removed.
    removable: bool,
    /// Fired by the remove button.
    on_remove: EventHandler<()>,
    /// Fired when the inline preview is clicked.
    on_open_viewer: EventHandler<()>,
}

/// Shown in place of the upload zone once a file is selected.
#[component]
pub fn FileInfo(props: FileInfoProps) -> Element {
    let on_remove = props.on_remove;

    rsx! {
        div { class: "file-info",
            div { class: "file-row",
                div { class: "file-icon",
                    Icon { icon: LdFileText, width: 32, height: 32 }
                }
                div { class: "file-meta",
                    p { class: "file-name", "{props.name}" }
                    p { class: "file-size", "{props.size}" }
                }
                if props.removable {
                    button {
                        class: "remove-btn",
                        aria_label: "Remove file",
                        title: "Remove file",
                        onclick: move |_| on_remove.call(()),
                        Icon { icon: LdX, width: 18, height: 18 }
                    }
                }
            }

            if let Some(preview) = props.preview {
                InlinePreview {
                    preview,
                    on_open: props.on_open_viewer,
                }
            } else if props.loading_preview {
                p { class: "preview-loading", "Loading preview..." }
            }
        }
    }
}
