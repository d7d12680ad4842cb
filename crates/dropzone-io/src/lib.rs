//! dropzone-io: Browser I/O and Dioxus component library.
//!
//! Adapts picker and drop file handles to the core's
//! [`FileSource`](dropzone_core::FileSource), turns image bytes into
//! Blob URLs for previews, runs timers on the browser event loop, and
//! provides the UI components for the dropzone web application.

pub mod blob;
pub mod components;
pub mod file;
pub mod keys;
pub mod log;
pub mod picker;
pub mod timer;

pub use components::{
    FileInfo, ImageViewer, InlinePreview, StepIndicator, Toast, UploadPanel, UploadZone,
};
pub use timer::SimulatedProcessor;
