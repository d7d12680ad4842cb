//! Event dispatch table for the uploader.
//!
//! [`Uploader`] owns every piece of uploader state and is the only place
//! it changes. Each UI event goes through [`Uploader::handle`], which
//! checks the guard, applies the transition, and returns the [`Effect`]s
//! the host must carry out (open the picker, read a preview, start a
//! timer, ...). Nothing here touches the browser, so the whole flow runs
//! in native unit tests.

use std::time::Duration;

use crate::candidate::UploadCandidate;
use crate::config::UploaderConfig;
use crate::notification::{NotificationCenter, Severity};
use crate::preview::{Preview, PreviewSlot};
use crate::session::{Phase, Session, SessionError};
use crate::types::{NotificationId, ProcessingTicket, SelectionId};
use crate::validate::{ValidationResult, validate_with};
use crate::viewer::{Viewer, ViewerInput};

/// User-facing notification texts.
pub mod messages {
    /// A file passed validation and is now selected.
    pub const FILE_ACCEPTED: &str = "File uploaded successfully!";
    /// The selected file was removed.
    pub const FILE_REMOVED: &str = "File removed";
    /// Finish was pressed with nothing selected.
    pub const NO_FILE_SELECTED: &str = "Please upload a file first";
    /// Processing finished.
    pub const PROCESSING_COMPLETE: &str = "Upload complete! Parsing and optimizing...";
    /// The back action ran.
    pub const GOING_BACK: &str = "Returning to the previous step";
    /// The preview read failed.
    pub const PREVIEW_FAILED: &str = "Could not load the image preview";
}

/// Something that happened in the UI or a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The upload zone was clicked or activated with Enter.
    Browse,
    /// A drag is hovering over the upload zone.
    DragOver,
    /// The drag left the upload zone.
    DragLeave,
    /// The file picker returned a file.
    FileChosen(UploadCandidate),
    /// Something was dropped on the upload zone; `None` when the payload
    /// carried no file.
    Drop(Option<UploadCandidate>),
    /// The remove button was pressed.
    Remove,
    /// The finish button was pressed.
    Finish,
    /// The processing task for `ticket` finished.
    ProcessingDone(ProcessingTicket),
    /// The back button was pressed.
    GoBack,
    /// The navigation delay elapsed.
    NavigationDue,
    /// A preview read finished.
    PreviewLoaded(Preview),
    /// A preview read failed.
    PreviewFailed(SelectionId),
    /// The inline preview was clicked.
    OpenViewer,
    /// Input while the viewer overlay is open.
    Viewer(ViewerInput),
    /// The auto-dismiss timer of a notification fired.
    NotificationExpired(NotificationId),
}

/// Work for the host to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open the native file picker.
    OpenFilePicker,
    /// Read the file's bytes and deliver [`Event::PreviewLoaded`] or
    /// [`Event::PreviewFailed`] for `selection`.
    ReadPreview {
        /// Selection the read belongs to.
        selection: SelectionId,
        /// The file to read.
        candidate: UploadCandidate,
    },
    /// Free the resource behind a preview that is no longer shown.
    ReleasePreview(Preview),
    /// Run the processing task, then deliver [`Event::ProcessingDone`].
    StartProcessing {
        /// Ticket to hand back on completion.
        ticket: ProcessingTicket,
        /// The file being processed.
        candidate: UploadCandidate,
        /// Simulated processing time.
        after: Duration,
    },
    /// Deliver [`Event::NavigationDue`] after the delay.
    ScheduleNavigation {
        /// Cosmetic transition delay.
        after: Duration,
    },
    /// Invoke the navigation collaborator.
    Navigate,
    /// Deliver [`Event::NotificationExpired`] after the delay.
    ScheduleDismiss {
        /// Notification to dismiss.
        id: NotificationId,
        /// Display duration.
        after: Duration,
    },
    /// A refused operation worth logging; no user-visible change.
    Diagnostic(String),
}

/// Complete uploader state for one hosting view.
#[derive(Debug, Clone, Default)]
pub struct Uploader {
    config: UploaderConfig,
    session: Session,
    notifications: NotificationCenter,
    preview: PreviewSlot,
    viewer: Viewer,
    dragging: bool,
}

impl Uploader {
    /// A fresh uploader using `config`.
    #[must_use]
    pub fn new(config: UploaderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// The session state machine.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The notification center.
    #[must_use]
    pub const fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// The inline preview.
    #[must_use]
    pub const fn preview(&self) -> &PreviewSlot {
        &self.preview
    }

    /// The viewer overlay.
    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Whether a drag is hovering over the upload zone.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The upload zone is shown only while nothing is selected.
    #[must_use]
    pub fn upload_zone_visible(&self) -> bool {
        self.session.phase() == Phase::Empty
    }

    /// The finish button is disabled once processing has started.
    ///
    /// It stays enabled with nothing selected so pressing it can explain
    /// that a file is needed.
    #[must_use]
    pub fn finish_enabled(&self) -> bool {
        matches!(self.session.phase(), Phase::Empty | Phase::FileSelected)
    }

    /// Apply `event` and return the effects to carry out, in order.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::Browse => {
                if self.upload_zone_visible() {
                    effects.push(Effect::OpenFilePicker);
                }
            }
            Event::DragOver => self.dragging = true,
            Event::DragLeave => self.dragging = false,
            Event::FileChosen(candidate) => self.accept(candidate, &mut effects),
            Event::Drop(candidate) => {
                self.dragging = false;
                if let Some(candidate) = candidate {
                    self.accept(candidate, &mut effects);
                }
            }
            Event::Remove => match self.session.remove() {
                Ok(_) => {
                    release(self.preview.clear(), &mut effects);
                    self.viewer.close();
                    self.notify(messages::FILE_REMOVED, Severity::Info, &mut effects);
                }
                Err(err) => effects.push(Effect::Diagnostic(err.to_string())),
            },
            Event::Finish => match self.session.finish() {
                Ok(ticket) => {
                    if let Some(candidate) = self.session.current_file().cloned() {
                        effects.push(Effect::StartProcessing {
                            ticket,
                            candidate,
                            after: self.config.processing_delay(),
                        });
                    }
                }
                Err(SessionError::NoFileSelected) => {
                    self.notify(messages::NO_FILE_SELECTED, Severity::Warning, &mut effects);
                }
                Err(err) => effects.push(Effect::Diagnostic(err.to_string())),
            },
            Event::ProcessingDone(ticket) => match self.session.complete(ticket) {
                Ok(()) => {
                    self.notify(
                        messages::PROCESSING_COMPLETE,
                        Severity::Success,
                        &mut effects,
                    );
                }
                Err(err) => effects.push(Effect::Diagnostic(err.to_string())),
            },
            Event::GoBack => effects.push(Effect::ScheduleNavigation {
                after: self.config.navigation_delay(),
            }),
            Event::NavigationDue => {
                effects.push(Effect::Navigate);
                self.notify(messages::GOING_BACK, Severity::Info, &mut effects);
            }
            Event::PreviewLoaded(preview) => {
                if let Err(stale) = self.preview.deliver(preview) {
                    effects.push(Effect::ReleasePreview(stale));
                }
            }
            Event::PreviewFailed(selection) => {
                if self.preview.fail(selection) {
                    self.notify(messages::PREVIEW_FAILED, Severity::Warning, &mut effects);
                }
            }
            Event::OpenViewer => {
                if let Some(preview) = self.preview.ready() {
                    self.viewer.open(preview.src.clone(), preview.title.clone());
                }
            }
            Event::Viewer(input) => {
                self.viewer.handle(&input);
            }
            Event::NotificationExpired(id) => {
                self.notifications.dismiss(id);
            }
        }
        effects
    }

    /// Validate and, on success, select `candidate`.
    fn accept(&mut self, candidate: UploadCandidate, effects: &mut Vec<Effect>) {
        let candidate = match validate_with(candidate, &self.config) {
            ValidationResult::Accepted(candidate) => candidate,
            ValidationResult::Rejected(reason) => {
                let message = reason.user_message(self.config.max_file_size);
                self.notify(message, Severity::Error, effects);
                return;
            }
        };

        let is_image = candidate.is_image();
        let selection = match self.session.select(candidate.clone()) {
            Ok(selection) => selection,
            Err(err) => {
                effects.push(Effect::Diagnostic(err.to_string()));
                return;
            }
        };

        self.viewer.close();
        if is_image {
            release(self.preview.begin(selection), effects);
            effects.push(Effect::ReadPreview {
                selection,
                candidate,
            });
        } else {
            release(self.preview.clear(), effects);
        }
        self.notify(messages::FILE_ACCEPTED, Severity::Success, effects);
    }

    /// Show a notification and schedule its dismissal.
    fn notify(&mut self, message: impl Into<String>, severity: Severity, effects: &mut Vec<Effect>) {
        let id = self.notifications.show(message, severity).id;
        effects.push(Effect::ScheduleDismiss {
            id,
            after: self.config.notification_duration(),
        });
    }
}

fn release(preview: Option<Preview>, effects: &mut Vec<Effect>) {
    if let Some(preview) = preview {
        effects.push(Effect::ReleasePreview(preview));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::notification::Notification;
    use crate::preview::PreviewState;

    fn uploader() -> Uploader {
        Uploader::new(UploaderConfig::default())
    }

    fn visible(uploader: &Uploader) -> &Notification {
        uploader.notifications().visible().unwrap()
    }

    fn read_preview_selection(effects: &[Effect]) -> SelectionId {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::ReadPreview { selection, .. } => Some(*selection),
                _ => None,
            })
            .unwrap()
    }

    fn loaded(selection: SelectionId, src: &str) -> Event {
        Event::PreviewLoaded(Preview {
            selection,
            src: src.to_owned(),
            title: "photo.png".to_owned(),
            dimensions: None,
        })
    }

    #[test]
    fn browse_opens_picker_only_when_zone_visible() {
        let mut up = uploader();
        assert_eq!(up.handle(Event::Browse), vec![Effect::OpenFilePicker]);

        up.handle(Event::FileChosen(UploadCandidate::new("a.txt", 1)));
        assert!(up.handle(Event::Browse).is_empty());
    }

    #[test]
    fn drag_highlight_toggles_and_drop_clears_it() {
        let mut up = uploader();
        up.handle(Event::DragOver);
        assert!(up.is_dragging());
        up.handle(Event::DragLeave);
        assert!(!up.is_dragging());

        up.handle(Event::DragOver);
        let effects = up.handle(Event::Drop(None));
        assert!(!up.is_dragging());
        assert!(effects.is_empty());
        assert_eq!(up.session().phase(), Phase::Empty);
    }

    #[test]
    fn accepted_document_selects_without_preview() {
        let mut up = uploader();
        let effects = up.handle(Event::FileChosen(UploadCandidate::new("resume.pdf", 500_000)));

        assert_eq!(up.session().phase(), Phase::FileSelected);
        assert!(!up.upload_zone_visible());
        assert!(up.finish_enabled());
        assert_eq!(up.preview().state(), &PreviewState::Hidden);
        assert!(!effects.iter().any(|e| matches!(e, Effect::ReadPreview { .. })));
        assert_eq!(visible(&up).severity, Severity::Success);
        assert_eq!(visible(&up).message, messages::FILE_ACCEPTED);
    }

    #[test]
    fn accepted_image_requests_preview_read() {
        let mut up = uploader();
        let effects = up.handle(Event::Drop(Some(UploadCandidate::new("photo.png", 2048))));
        let selection = read_preview_selection(&effects);
        assert!(up.preview().is_loading(selection));
        assert!(up.session().is_current_selection(selection));
    }

    #[test]
    fn rejection_leaves_session_untouched() {
        let mut up = uploader();
        let effects = up.handle(Event::FileChosen(UploadCandidate::new("photo.png", 20_000_000)));

        assert_eq!(up.session().phase(), Phase::Empty);
        assert!(up.session().current_file().is_none());
        assert_eq!(visible(&up).severity, Severity::Error);
        assert_eq!(visible(&up).message, "File exceeds the size limit (max 10 MB)");
        assert!(matches!(effects.as_slice(), [Effect::ScheduleDismiss { .. }]));
    }

    #[test]
    fn rejection_does_not_replace_selected_file() {
        let mut up = uploader();
        up.handle(Event::FileChosen(UploadCandidate::new("resume.pdf", 10)));
        up.handle(Event::FileChosen(UploadCandidate::new("virus.exe", 10)));
        assert_eq!(up.session().current_file().unwrap().name(), "resume.pdf");
    }

    #[test]
    fn every_notification_schedules_its_dismissal() {
        let mut up = uploader();
        let effects = up.handle(Event::FileChosen(UploadCandidate::new("notes", 100)));
        let id = visible(&up).id;
        assert_eq!(
            effects,
            vec![Effect::ScheduleDismiss {
                id,
                after: Duration::from_millis(3000)
            }]
        );

        up.handle(Event::NotificationExpired(id));
        assert!(up.notifications().visible().is_none());
    }

    #[test]
    fn finish_without_file_warns_and_stays_empty() {
        let mut up = uploader();
        assert!(up.finish_enabled());
        let effects = up.handle(Event::Finish);
        assert_eq!(up.session().phase(), Phase::Empty);
        assert_eq!(visible(&up).severity, Severity::Warning);
        assert_eq!(visible(&up).message, messages::NO_FILE_SELECTED);
        assert!(!effects.iter().any(|e| matches!(e, Effect::StartProcessing { .. })));
    }

    #[test]
    fn finish_runs_processing_then_completes() {
        let mut up = uploader();
        up.handle(Event::FileChosen(UploadCandidate::new("resume.pdf", 500_000)));

        let effects = up.handle(Event::Finish);
        assert_eq!(up.session().phase(), Phase::Processing);
        assert!(!up.finish_enabled());
        let [
            Effect::StartProcessing {
                ticket,
                candidate,
                after,
            },
        ] = effects.as_slice()
        else {
            panic!("expected a single StartProcessing, got {effects:?}");
        };
        assert_eq!(candidate.name(), "resume.pdf");
        assert_eq!(*after, Duration::from_secs(2));

        up.handle(Event::ProcessingDone(*ticket));
        assert_eq!(up.session().phase(), Phase::Completed);
        assert_eq!(visible(&up).severity, Severity::Success);
        assert_eq!(visible(&up).message, messages::PROCESSING_COMPLETE);
    }

    #[test]
    fn double_finish_is_only_logged() {
        let mut up = uploader();
        up.handle(Event::FileChosen(UploadCandidate::new("resume.pdf", 1)));
        up.handle(Event::Finish);
        let effects = up.handle(Event::Finish);
        assert!(matches!(effects.as_slice(), [Effect::Diagnostic(_)]));
        assert_eq!(up.session().phase(), Phase::Processing);
    }

    #[test]
    fn remove_releases_preview_and_closes_viewer() {
        let mut up = uploader();
        let effects = up.handle(Event::FileChosen(UploadCandidate::new("photo.png", 10)));
        let selection = read_preview_selection(&effects);
        up.handle(loaded(selection, "blob:a"));
        up.handle(Event::OpenViewer);
        assert!(up.viewer().is_open());

        let effects = up.handle(Event::Remove);
        assert_eq!(up.session().phase(), Phase::Empty);
        assert!(!up.viewer().is_open());
        assert!(effects.iter().any(
            |e| matches!(e, Effect::ReleasePreview(p) if p.src == "blob:a")
        ));
        assert_eq!(visible(&up).message, messages::FILE_REMOVED);
        assert_eq!(visible(&up).severity, Severity::Info);
    }

    #[test]
    fn preview_arriving_after_remove_is_released() {
        let mut up = uploader();
        let effects = up.handle(Event::FileChosen(UploadCandidate::new("photo.png", 10)));
        let selection = read_preview_selection(&effects);
        up.handle(Event::Remove);

        let effects = up.handle(loaded(selection, "blob:late"));
        assert_eq!(up.preview().state(), &PreviewState::Hidden);
        assert!(matches!(
            effects.as_slice(),
            [Effect::ReleasePreview(p)] if p.src == "blob:late"
        ));
    }

    #[test]
    fn preview_arriving_after_replacement_is_released() {
        let mut up = uploader();
        let first = read_preview_selection(
            &up.handle(Event::FileChosen(UploadCandidate::new("one.png", 10))),
        );
        let second = read_preview_selection(
            &up.handle(Event::FileChosen(UploadCandidate::new("two.gif", 10))),
        );

        let effects = up.handle(loaded(first, "blob:one"));
        assert!(matches!(effects.as_slice(), [Effect::ReleasePreview(_)]));
        assert!(up.preview().is_loading(second));

        up.handle(loaded(second, "blob:two"));
        assert_eq!(up.preview().ready().unwrap().src, "blob:two");
    }

    #[test]
    fn selecting_a_document_clears_image_preview() {
        let mut up = uploader();
        let selection = read_preview_selection(
            &up.handle(Event::FileChosen(UploadCandidate::new("photo.png", 10))),
        );
        up.handle(loaded(selection, "blob:img"));

        let effects = up.handle(Event::FileChosen(UploadCandidate::new("resume.pdf", 10)));
        assert!(up.preview().ready().is_none());
        assert!(effects.iter().any(|e| matches!(e, Effect::ReleasePreview(_))));
    }

    #[test]
    fn failed_preview_warns_once() {
        let mut up = uploader();
        let selection = read_preview_selection(
            &up.handle(Event::FileChosen(UploadCandidate::new("photo.webp", 10))),
        );
        up.handle(Event::PreviewFailed(selection));
        assert_eq!(visible(&up).message, messages::PREVIEW_FAILED);

        let effects = up.handle(Event::PreviewFailed(selection));
        assert!(effects.is_empty());
    }

    #[test]
    fn viewer_opens_from_ready_preview_and_closes_on_escape() {
        let mut up = uploader();
        up.handle(Event::OpenViewer);
        assert!(!up.viewer().is_open());

        let selection = read_preview_selection(
            &up.handle(Event::FileChosen(UploadCandidate::new("photo.png", 10))),
        );
        up.handle(loaded(selection, "blob:v"));
        up.handle(Event::OpenViewer);
        assert_eq!(up.viewer().content().unwrap().src, "blob:v");

        up.handle(Event::Viewer(ViewerInput::ContentClick));
        assert!(up.viewer().is_open());
        up.handle(Event::Viewer(ViewerInput::Key("Escape".into())));
        assert!(!up.viewer().is_open());
    }

    #[test]
    fn page_wide_keys_only_close_viewer_on_escape() {
        let mut up = uploader();
        let selection = read_preview_selection(
            &up.handle(Event::FileChosen(UploadCandidate::new("photo.png", 10))),
        );
        up.handle(loaded(selection, "blob:k"));
        up.handle(Event::OpenViewer);

        for key in ["a", "Enter", "Tab", "Esc"] {
            assert!(up.handle(Event::Viewer(ViewerInput::Key(key.into()))).is_empty());
            assert!(up.viewer().is_open(), "{key}");
        }
        up.handle(Event::Viewer(ViewerInput::Key("Escape".into())));
        assert!(!up.viewer().is_open());

        // Keys arriving after the overlay closed change nothing.
        up.handle(Event::Viewer(ViewerInput::Key("Escape".into())));
        assert!(!up.viewer().is_open());
        assert_eq!(up.preview().ready().unwrap().src, "blob:k");
    }

    #[test]
    fn go_back_navigates_after_delay() {
        let mut up = uploader();
        assert_eq!(
            up.handle(Event::GoBack),
            vec![Effect::ScheduleNavigation {
                after: Duration::from_millis(300)
            }]
        );
        let effects = up.handle(Event::NavigationDue);
        assert_eq!(effects.first(), Some(&Effect::Navigate));
        assert_eq!(visible(&up).message, messages::GOING_BACK);
        assert_eq!(up.session().phase(), Phase::Empty);
    }
}
