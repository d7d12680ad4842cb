//! Input capture: normalizing raw file handles into upload candidates.
//!
//! The file picker and the drag-and-drop payload hand over different
//! handle types. Both implement [`FileSource`], and both become the same
//! immutable [`UploadCandidate`] before validation.

use serde::{Deserialize, Serialize};

use crate::validate::IMAGE_EXTENSIONS;

/// A raw file handle exposing a name and a byte size.
pub trait FileSource {
    /// The file name as reported by the browser or filesystem.
    fn file_name(&self) -> String;

    /// The file size in bytes.
    fn size_bytes(&self) -> u64;
}

/// A file proposed for upload, post-normalization and pre-validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    name: String,
    size_bytes: u64,
    extension: String,
    is_image: bool,
}

impl UploadCandidate {
    /// Build a candidate from a name and a byte size.
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name).unwrap_or_default();
        let is_image = IMAGE_EXTENSIONS.contains(&extension.as_str());
        Self {
            name,
            size_bytes,
            extension,
            is_image,
        }
    }

    /// Build a candidate from any [`FileSource`].
    #[must_use]
    pub fn from_source(source: &impl FileSource) -> Self {
        Self::new(source.file_name(), source.size_bytes())
    }

    /// Original file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Lowercased extension with its leading dot (e.g. `".pdf"`), or the
    /// empty string when the name contains no `.`.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether the extension names an image format that can be previewed.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        self.is_image
    }

    /// MIME type implied by the extension, used when wrapping the bytes
    /// in a preview Blob.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        match self.extension.as_str() {
            ".pdf" => "application/pdf",
            ".doc" => "application/msword",
            ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ".txt" => "text/plain",
            ".jpg" | ".jpeg" => "image/jpeg",
            ".png" => "image/png",
            ".gif" => "image/gif",
            ".webp" => "image/webp",
            ".bmp" => "image/bmp",
            ".svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }

    /// Human-readable size (see [`format_file_size`]).
    #[must_use]
    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Extract the extension of `name`: the text after the final `.`,
/// lowercased and prefixed with `.`.
///
/// Returns `None` when the name has no `.` at all.
#[must_use]
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
}

/// Format a byte count with base-1024 units.
///
/// Two decimal places, halves rounded up, trailing zeros stripped: 1536
/// bytes is `"1.5 KB"`, 1152 bytes is `"1.13 KB"` and 1024 bytes is
/// `"1 KB"`. Anything at or above 1 GiB is
/// expressed in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    // Hundredths of a unit, rounded half up.
    let hundredths = (u128::from(bytes) * 100 + u128::from(scale) / 2) / u128::from(scale);
    let fixed = format!("{}.{:02}", hundredths / 100, hundredths % 100);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}
