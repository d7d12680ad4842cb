//! Upload zone with drag-and-drop and click/Enter to browse.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dropzone_core::validate::ACCEPT_ATTRIBUTE;

use crate::picker::FILE_INPUT_ID;

/// Props for the [`UploadZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadZoneProps {
    /// Whether a drag is hovering over the zone.
    dragging: bool,
    /// Human-readable size ceiling, shown in the hint line.
    max_size: String,
    /// Fired when the zone is clicked or activated with Enter.
    on_browse: EventHandler<()>,
    /// Fired while a drag hovers over the zone.
    on_drag_over: EventHandler<()>,
    /// Fired when a drag leaves the zone.
    on_drag_leave: EventHandler<()>,
    /// Fired with the first file chosen in the picker.
    on_file: EventHandler<FileData>,
    /// Fired on drop with the first dropped file, if any.
    on_drop: EventHandler<Option<FileData>>,
}

/// A focusable drop target plus the hidden file input it opens.
///
/// The input sits outside the zone so the programmatic click that opens
/// the picker does not bubble back into the zone's click handler.
#[component]
pub fn UploadZone(props: UploadZoneProps) -> Element {
    let on_browse = props.on_browse;
    let on_drag_over = props.on_drag_over;
    let on_drag_leave = props.on_drag_leave;
    let on_file = props.on_file;
    let on_drop = props.on_drop;

    let handle_files = move |evt: FormEvent| {
        if let Some(file) = evt.files().into_iter().next() {
            on_file.call(file);
        }
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        on_drop.call(evt.files().into_iter().next());
    };

    let max_size = &props.max_size;
    let zone_class = if props.dragging {
        "upload-zone dragover"
    } else {
        "upload-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            tabindex: "0",
            role: "button",
            aria_label: "Click or drag a file here to upload a resume or image",
            onclick: move |_| on_browse.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    on_browse.call(());
                }
            },
            ondragover: move |evt| {
                evt.prevent_default();
                on_drag_over.call(());
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                on_drag_leave.call(());
            },
            ondrop: handle_drop,

            div { class: "upload-icon",
                Icon { icon: LdUpload, width: 48, height: 48 }
            }
            p { class: "upload-title", "Drop a file here or click to browse" }
            p { class: "upload-hint",
                "PDF, DOC, DOCX, TXT, JPG, PNG, GIF, WEBP, BMP, SVG (max {max_size})"
            }
        }

        input {
            id: FILE_INPUT_ID,
            r#type: "file",
            accept: ACCEPT_ATTRIBUTE,
            class: "hidden",
            onchange: handle_files,
        }
    }
}
