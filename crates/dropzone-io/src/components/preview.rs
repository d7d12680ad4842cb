//! Inline image preview thumbnail.

use dioxus::prelude::*;
use dropzone_core::Preview;

/// Props for the [`InlinePreview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct InlinePreviewProps {
    /// The preview to show. Its Blob URL is owned by the uploader host.
    preview: Preview,
    /// Fired when the thumbnail is clicked, to enlarge it.
    on_open: EventHandler<()>,
}

/// Clickable thumbnail of an accepted image.
#[component]
pub fn InlinePreview(props: InlinePreviewProps) -> Element {
    let preview = &props.preview;
    let on_open = props.on_open;

    rsx! {
        div { class: "image-preview",
            img {
                src: "{preview.src}",
                alt: "Preview of {preview.title}",
                title: "Click to enlarge",
                onclick: move |_| on_open.call(()),
            }
            if let Some(dimensions) = preview.dimensions {
                p { class: "preview-dimensions", "{dimensions} px" }
            }
        }
    }
}
