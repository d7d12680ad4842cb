//! dropzone-core: Pure upload validation and session state machine (sans-IO).
//!
//! Covers everything between "the user handed us a file" and "the
//! upload is complete":
//!
//! - [`candidate`]: normalizing picker and drag-and-drop handles into an
//!   [`UploadCandidate`]
//! - [`validate`]: extension allow-list and size ceiling
//! - [`session`]: the `Empty → FileSelected → Processing → Completed`
//!   state machine
//! - [`preview`], [`viewer`], [`notification`]: the single inline
//!   preview, the enlarged viewer, and the single visible toast
//! - [`dispatch`]: the event table tying it together
//! - [`processing`]: the cancellable processing task
//!
//! This crate has **no I/O dependencies**. Timers, file reads and
//! rendering live in `dropzone-io`, which carries out the [`Effect`]s
//! returned by [`Uploader::handle`].

pub mod candidate;
pub mod config;
pub mod dispatch;
pub mod notification;
pub mod preview;
pub mod processing;
pub mod session;
pub mod types;
pub mod validate;
pub mod viewer;

pub use candidate::{FileSource, UploadCandidate, format_file_size};
pub use config::{ConfigError, UploaderConfig};
pub use dispatch::{Effect, Event, Uploader};
pub use notification::{Notification, NotificationCenter, Severity};
pub use preview::{Preview, PreviewSlot, PreviewState, probe_dimensions};
pub use processing::{CancelHandle, Processor, processing_task};
pub use session::{Phase, Session, SessionError};
pub use types::{Dimensions, NotificationId, ProcessingTicket, SelectionId};
pub use validate::{RejectReason, ValidationResult, validate, validate_with};
pub use viewer::{Viewer, ViewerContent, ViewerInput};
