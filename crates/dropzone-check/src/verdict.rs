//! Checking one path and rendering the result.

use std::fmt;
use std::path::Path;

use dropzone_core::{
    Dimensions, FileSource, UploadCandidate, UploaderConfig, ValidationResult, probe_dimensions,
    validate_with,
};
use serde::Serialize;

/// A file on disk, seen through its name and length.
struct DiskFile {
    name: String,
    len: u64,
}

impl FileSource for DiskFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.len
    }
}

/// Outcome class of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Would be accepted by the uploader.
    Accepted,
    /// Would be refused by the uploader.
    Rejected,
    /// Could not be inspected.
    Unreadable,
}

impl Status {
    const fn label(self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPT",
            Self::Rejected => "REJECT",
            Self::Unreadable => "ERROR",
        }
    }
}

/// Result of checking one path.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub path: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Rejection message or I/O error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

impl Verdict {
    fn unreadable(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.display().to_string(),
            status: Status::Unreadable,
            size_bytes: None,
            size: None,
            reason: Some(reason.into()),
            dimensions: None,
        }
    }

    /// Whether the file would be accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7}{}", self.status.label(), self.path)?;
        if let Some(size) = &self.size {
            write!(f, " ({size})")?;
        }
        if let Some(dimensions) = self.dimensions {
            write!(f, " {dimensions}")?;
        }
        if let Some(reason) = &self.reason {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

/// Check the file at `path` against the rules in `config`.
///
/// Accepted images are read so their pixel size can be reported.
pub fn check(path: &Path, config: &UploaderConfig) -> Verdict {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) => return Verdict::unreadable(path, e.to_string()),
    };
    if !metadata.is_file() {
        return Verdict::unreadable(path, "not a regular file");
    }

    let name = path
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    let candidate = UploadCandidate::from_source(&DiskFile {
        name,
        len: metadata.len(),
    });

    let mut verdict = Verdict {
        path: path.display().to_string(),
        status: Status::Accepted,
        size_bytes: Some(candidate.size_bytes()),
        size: Some(candidate.display_size()),
        reason: None,
        dimensions: None,
    };

    match validate_with(candidate, config) {
        ValidationResult::Accepted(candidate) => {
            if candidate.is_image() {
                match std::fs::read(path) {
                    Ok(bytes) => verdict.dimensions = probe_dimensions(&bytes),
                    Err(e) => return Verdict::unreadable(path, e.to_string()),
                }
            }
        }
        ValidationResult::Rejected(reason) => {
            verdict.status = Status::Rejected;
            verdict.reason = Some(reason.user_message(config.max_file_size));
        }
    }
    verdict
}
