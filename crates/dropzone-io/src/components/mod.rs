//! Dioxus UI components for dropzone.
//!
//! Provides the upload zone, the selected-file panel with its inline
//! preview, the full-size image viewer, toast notifications, the step
//! indicator, and the [`UploadPanel`] that ties them to an uploader.

mod file_info;
mod panel;
mod preview;
mod steps;
mod toast;
mod upload;
mod viewer;

pub use file_info::FileInfo;
pub use panel::UploadPanel;
pub use preview::InlinePreview;
pub use steps::{STEPS, StepIndicator, StepState, step_states};
pub use toast::Toast;
pub use upload::UploadZone;
pub use viewer::ImageViewer;
