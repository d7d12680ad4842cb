//! Single-file upload session state machine.
//!
//! ```text
//!            select            finish              complete
//!   Empty ───────────▶ FileSelected ───────▶ Processing ───────▶ Completed
//!     ▲                  │    ▲ │
//!     └──── remove ──────┘    └─┘ select (replace)
//! ```
//!
//! Every operation that is not valid in the current phase returns a
//! [`SessionError`] and leaves the session untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::candidate::UploadCandidate;
use crate::types::{ProcessingTicket, SelectionId};

/// Stage of the single-file upload lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No file chosen; the upload zone is shown.
    #[default]
    Empty,
    /// A validated file is held; the file-info panel is shown.
    FileSelected,
    /// Finish was requested and processing is under way.
    Processing,
    /// Processing finished. Terminal for the session.
    Completed,
}

impl Phase {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::FileSelected => "File selected",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session operations, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// [`Session::select`].
    Select,
    /// [`Session::remove`].
    Remove,
    /// [`Session::finish`].
    Finish,
    /// [`Session::complete`].
    Complete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Select => "select",
            Self::Remove => "remove",
            Self::Finish => "finish",
            Self::Complete => "complete",
        })
    }
}

/// Refused session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `finish` was requested with no file selected.
    #[error("no file selected")]
    NoFileSelected,

    /// The operation is not valid in the current phase.
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        /// Phase the session was in.
        phase: Phase,
        /// Operation that was refused.
        action: Action,
    },

    /// A completion arrived for a processing run that is not the current one.
    #[error("processing ticket {0} is not current")]
    StaleTicket(u64),
}

/// The session: the current file (if any) and the phase.
///
/// `current` is `None` exactly when the phase is [`Phase::Empty`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<UploadCandidate>,
    phase: Phase,
    last_selection: u64,
    last_ticket: u64,
    active_ticket: Option<ProcessingTicket>,
}

impl Session {
    /// A fresh, empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The accepted file, if any.
    #[must_use]
    pub const fn current_file(&self) -> Option<&UploadCandidate> {
        self.current.as_ref()
    }

    /// Id of the most recent successful selection, if one was made.
    #[must_use]
    pub const fn current_selection(&self) -> Option<SelectionId> {
        match self.current {
            Some(_) => Some(SelectionId(self.last_selection)),
            None => None,
        }
    }

    /// Whether `id` names the file currently held.
    #[must_use]
    pub fn is_current_selection(&self, id: SelectionId) -> bool {
        self.current_selection() == Some(id)
    }

    /// Hold `candidate` as the current file, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] once processing has
    /// started.
    pub fn select(&mut self, candidate: UploadCandidate) -> Result<SelectionId, SessionError> {
        match self.phase {
            Phase::Empty | Phase::FileSelected => {
                self.last_selection += 1;
                self.current = Some(candidate);
                self.phase = Phase::FileSelected;
                Ok(SelectionId(self.last_selection))
            }
            phase => Err(SessionError::InvalidTransition {
                phase,
                action: Action::Select,
            }),
        }
    }

    /// Drop the current file and return to [`Phase::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] outside
    /// [`Phase::FileSelected`].
    pub fn remove(&mut self) -> Result<UploadCandidate, SessionError> {
        if self.phase != Phase::FileSelected {
            return Err(SessionError::InvalidTransition {
                phase: self.phase,
                action: Action::Remove,
            });
        }
        let removed = self.current.take().ok_or(SessionError::NoFileSelected)?;
        self.phase = Phase::Empty;
        Ok(removed)
    }

    /// Start processing the current file.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoFileSelected`] when no file is held and
    /// [`SessionError::InvalidTransition`] when processing already
    /// started or finished.
    pub fn finish(&mut self) -> Result<ProcessingTicket, SessionError> {
        if self.current.is_none() {
            return Err(SessionError::NoFileSelected);
        }
        if self.phase != Phase::FileSelected {
            return Err(SessionError::InvalidTransition {
                phase: self.phase,
                action: Action::Finish,
            });
        }
        self.last_ticket += 1;
        let ticket = ProcessingTicket(self.last_ticket);
        self.active_ticket = Some(ticket);
        self.phase = Phase::Processing;
        Ok(ticket)
    }

    /// Mark the processing run identified by `ticket` as complete.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidTransition`] outside
    /// [`Phase::Processing`] and [`SessionError::StaleTicket`] for a
    /// ticket other than the one issued by the last `finish`.
    pub fn complete(&mut self, ticket: ProcessingTicket) -> Result<(), SessionError> {
        if self.phase != Phase::Processing {
            return Err(SessionError::InvalidTransition {
                phase: self.phase,
                action: Action::Complete,
            });
        }
        if self.active_ticket != Some(ticket) {
            return Err(SessionError::StaleTicket(ticket.get()));
        }
        self.active_ticket = None;
        self.phase = Phase::Completed;
        Ok(())
    }
}
