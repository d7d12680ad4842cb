use dioxus::prelude::*;
use dropzone_core::UploaderConfig;
use dropzone_io::{UploadPanel, log};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Renders the page chrome around the upload step. The previous step of
/// the onboarding flow does not exist yet, so "back" only logs.
fn app() -> Element {
    let on_back = move |()| {
        log::info("back requested; no previous step is mounted");
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div { class: "page",
            header { class: "page-header",
                h1 { class: "brand", "dropzone" }
                p { class: "tagline", "Resume and image upload" }
            }

            main { class: "page-main",
                UploadPanel {
                    config: UploaderConfig::default(),
                    on_back,
                }
            }
        }
    }
}
