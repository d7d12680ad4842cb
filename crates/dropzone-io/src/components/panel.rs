//! The upload step: owns the uploader state and carries out its effects.

use dioxus::html::FileData;
use dioxus::prelude::*;
use dropzone_core::{
    CancelHandle, Effect, Event, Phase, Uploader, UploaderConfig, format_file_size,
    processing_task,
};

use super::file_info::FileInfo;
use super::steps::StepIndicator;
use super::toast::Toast;
use super::upload::UploadZone;
use super::viewer::ImageViewer;
use crate::timer::{self, SimulatedProcessor};
use crate::{blob, file, log, picker};

/// Signal handles shared by every event handler and spawned task.
#[derive(Clone, Copy)]
struct Host {
    uploader: Signal<Uploader>,
    processing: Signal<Option<CancelHandle>>,
    on_back: EventHandler<()>,
}

impl Host {
    /// Feed `event` to the uploader and run the resulting effects.
    ///
    /// `chosen` is the browser handle behind a `FileChosen`/`Drop` event;
    /// it is needed to read the preview bytes.
    fn dispatch(self, event: Event, chosen: Option<FileData>) {
        let mut uploader = self.uploader;
        let effects = uploader.write().handle(event);
        self.run(effects, chosen);
    }

    fn run(self, effects: Vec<Effect>, mut chosen: Option<FileData>) {
        for effect in effects {
            match effect {
                Effect::OpenFilePicker => {
                    if let Err(e) = picker::open_file_picker() {
                        log::warn(&format!("could not open file picker: {e}"));
                    }
                }
                Effect::ReadPreview {
                    selection,
                    candidate,
                } => {
                    let Some(handle) = chosen.take() else {
                        log::warn("preview requested without a file handle");
                        self.dispatch(Event::PreviewFailed(selection), None);
                        continue;
                    };
                    spawn(async move {
                        match file::read_preview(handle, selection, &candidate).await {
                            Ok(preview) => self.dispatch(Event::PreviewLoaded(preview), None),
                            Err(e) => {
                                log::warn(&format!("preview of {} failed: {e}", candidate.name()));
                                self.dispatch(Event::PreviewFailed(selection), None);
                            }
                        }
                    });
                }
                Effect::ReleasePreview(preview) => blob::revoke_blob_url(&preview.src),
                Effect::StartProcessing {
                    ticket,
                    candidate,
                    after,
                } => {
                    log::info(&format!("processing {}", candidate.name()));
                    let (task, handle) =
                        processing_task(SimulatedProcessor::new(after), ticket, candidate);
                    let mut processing = self.processing;
                    if let Some(previous) = processing.write().replace(handle) {
                        previous.cancel();
                    }
                    spawn(async move {
                        if let Some(ticket) = task.await {
                            processing.set(None);
                            self.dispatch(Event::ProcessingDone(ticket), None);
                        }
                    });
                }
                Effect::ScheduleNavigation { after } => {
                    spawn(async move {
                        timer::sleep(after).await;
                        self.dispatch(Event::NavigationDue, None);
                    });
                }
                Effect::Navigate => self.on_back.call(()),
                Effect::ScheduleDismiss { id, after } => {
                    if let Some(shown) = self.uploader.peek().notifications().get(id) {
                        log::notification(shown);
                    }
                    spawn(async move {
                        timer::sleep(after).await;
                        self.dispatch(Event::NotificationExpired(id), None);
                    });
                }
                Effect::Diagnostic(message) => log::warn(&message),
            }
        }
    }

    /// Stop processing and free the preview when the view goes away.
    fn teardown(self) {
        if let Some(handle) = self.processing.peek().as_ref() {
            handle.cancel();
        }
        if let Some(preview) = self.uploader.peek().preview().ready() {
            blob::revoke_blob_url(&preview.src);
        }
    }
}

/// Props for the [`UploadPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadPanelProps {
    /// Size ceiling and timing.
    #[props(default)]
    config: UploaderConfig,
    /// Navigation collaborator, called after the back delay.
    on_back: EventHandler<()>,
}

/// Resume/image upload step with finish and back actions.
#[component]
pub fn UploadPanel(props: UploadPanelProps) -> Element {
    let config = props.config.clone();
    let uploader = use_signal(move || Uploader::new(config));
    let processing = use_signal(|| Option::<CancelHandle>::None);
    let host = Host {
        uploader,
        processing,
        on_back: props.on_back,
    };

    use_hook(|| log::info("uploader initialized"));
    use_drop(move || host.teardown());

    let state = uploader.read();
    let phase = state.session().phase();
    let max_size = format_file_size(state.config().max_file_size);
    let finish_enabled = state.finish_enabled();
    let current = state.session().current_file().map(|c| {
        let loading = state
            .session()
            .current_selection()
            .is_some_and(|s| state.preview().is_loading(s));
        (c.name().to_owned(), c.display_size(), loading)
    });
    let preview = state.preview().ready().cloned();
    let viewer = state.viewer().content().cloned();
    let toast = state.notifications().visible().cloned();
    let dragging = state.is_dragging();
    drop(state);

    rsx! {
        section { class: "uploader",
            StepIndicator { phase }

            h2 { class: "uploader-title", "Upload your resume" }
            p { class: "uploader-subtitle",
                "We will parse it and fill in your profile."
            }

            if let Some((name, size, loading_preview)) = current {
                FileInfo {
                    name,
                    size,
                    loading_preview,
                    preview,
                    removable: phase == Phase::FileSelected,
                    on_remove: move |()| host.dispatch(Event::Remove, None),
                    on_open_viewer: move |()| host.dispatch(Event::OpenViewer, None),
                }
            } else {
                UploadZone {
                    dragging,
                    max_size,
                    on_browse: move |()| host.dispatch(Event::Browse, None),
                    on_drag_over: move |()| host.dispatch(Event::DragOver, None),
                    on_drag_leave: move |()| host.dispatch(Event::DragLeave, None),
                    on_file: move |f: FileData| {
                        let candidate = file::candidate(&f);
                        host.dispatch(Event::FileChosen(candidate), Some(f));
                    },
                    on_drop: move |f: Option<FileData>| {
                        let candidate = f.as_ref().map(file::candidate);
                        host.dispatch(Event::Drop(candidate), f);
                    },
                }
            }

            div { class: "actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| host.dispatch(Event::GoBack, None),
                    "Back"
                }
                button {
                    class: "btn btn-primary",
                    disabled: !finish_enabled,
                    onclick: move |_| host.dispatch(Event::Finish, None),
                    if phase == Phase::Processing {
                        span { class: "spinner", aria_hidden: "true" }
                        "Processing..."
                    } else if phase == Phase::Completed {
                        "Done"
                    } else {
                        "Finish"
                    }
                }
            }
        }

        if let Some(content) = viewer {
            ImageViewer {
                src: content.src,
                title: content.title,
                on_input: move |input| host.dispatch(Event::Viewer(input), None),
            }
        }

        if let Some(toast) = toast {
            Toast { key: "{toast.id.get()}", message: toast.message, severity: toast.severity }
        }
    }
}
