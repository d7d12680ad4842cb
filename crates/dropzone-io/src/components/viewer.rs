//! Full-screen image viewer overlay.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdX;
use dropzone_core::ViewerInput;
use futures::StreamExt;

use crate::keys::DocumentKeys;
use crate::log;

/// Props for the [`ImageViewer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageViewerProps {
    /// Image source.
    src: String,
    /// Caption (the file name).
    title: String,
    /// Fired for every close-relevant input; the uploader decides what
    /// closes the overlay.
    on_input: EventHandler<ViewerInput>,
}

/// Dimmed overlay showing the image at full size.
///
/// Keys are heard on the whole document for as long as the overlay is
/// mounted, so Escape works wherever focus has moved. The listener is
/// held by a hook and detached when the overlay unmounts.
#[component]
pub fn ImageViewer(props: ImageViewerProps) -> Element {
    let on_input = props.on_input;

    use_hook(move || match DocumentKeys::listen() {
        Ok((listener, mut keys)) => {
            spawn(async move {
                while let Some(key) = keys.next().await {
                    on_input.call(ViewerInput::Key(key));
                }
            });
            Some(Rc::new(listener))
        }
        Err(e) => {
            log::warn(&format!("viewer key listener unavailable: {e}"));
            None
        }
    });

    rsx! {
        div {
            class: "viewer-backdrop",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{props.title}",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onclick: move |_| on_input.call(ViewerInput::BackdropClick),

            div {
                class: "viewer-content",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_input.call(ViewerInput::ContentClick);
                },

                img { src: "{props.src}", alt: "{props.title}" }
                button {
                    class: "viewer-close",
                    aria_label: "Close",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_input.call(ViewerInput::CloseButton);
                    },
                    Icon { icon: LdX, width: 20, height: 20 }
                }
                p { class: "viewer-title", "{props.title}" }
            }
        }
    }
}
