//! Candidate validation: extension allow-list and size ceiling.

use serde::{Deserialize, Serialize};

use crate::candidate::{UploadCandidate, format_file_size};
use crate::config::UploaderConfig;

/// Extensions accepted for upload (lowercase, with leading dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".txt", ".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg",
];

/// Subset of [`ALLOWED_EXTENSIONS`] that gets an inline image preview.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg"];

/// Default size ceiling: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png,.gif,.webp,.bmp,.svg";

/// Why a candidate was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RejectReason {
    /// The extension is missing or not in [`ALLOWED_EXTENSIONS`].
    #[error("unsupported file type")]
    UnsupportedType,

    /// The file exceeds the size ceiling.
    #[error("file is too large")]
    TooLarge,
}

impl RejectReason {
    /// Message shown to the user in the error toast.
    ///
    /// `max_file_size` is the ceiling the candidate was checked against.
    #[must_use]
    pub fn user_message(self, max_file_size: u64) -> String {
        match self {
            Self::UnsupportedType => {
                "Please choose a supported format: PDF, DOC, DOCX, TXT, JPG, PNG, GIF, WEBP, BMP, SVG"
                    .to_owned()
            }
            Self::TooLarge => format!(
                "File exceeds the size limit (max {})",
                format_file_size(max_file_size)
            ),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The candidate passed both checks.
    Accepted(UploadCandidate),
    /// The candidate failed a check.
    Rejected(RejectReason),
}

impl ValidationResult {
    /// Returns `true` for [`ValidationResult::Accepted`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Convert into a `Result`, for `?` in callers.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] of a rejected candidate.
    pub fn into_result(self) -> Result<UploadCandidate, RejectReason> {
        match self {
            Self::Accepted(candidate) => Ok(candidate),
            Self::Rejected(reason) => Err(reason),
        }
    }
}

/// Returns `true` if `extension` (lowercase, leading dot) may be uploaded.
#[must_use]
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

/// Validate a candidate against the default 10 MiB ceiling.
#[must_use]
pub fn validate(candidate: UploadCandidate) -> ValidationResult {
    validate_with_limit(candidate, MAX_FILE_SIZE)
}

/// Validate a candidate against the ceiling in `config`.
#[must_use]
pub fn validate_with(candidate: UploadCandidate, config: &UploaderConfig) -> ValidationResult {
    validate_with_limit(candidate, config.max_file_size)
}

/// Type check first; the size check only runs for an allowed type.
fn validate_with_limit(candidate: UploadCandidate, max_file_size: u64) -> ValidationResult {
    if !is_allowed_extension(candidate.extension()) {
        return ValidationResult::Rejected(RejectReason::UnsupportedType);
    }
    if candidate.size_bytes() > max_file_size {
        return ValidationResult::Rejected(RejectReason::TooLarge);
    }
    ValidationResult::Accepted(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, size: u64) -> ValidationResult {
        validate(UploadCandidate::new(name, size))
    }

    #[test]
    fn accepts_every_allowed_extension() {
        for ext in ALLOWED_EXTENSIONS {
            let name = format!("file{ext}");
            assert!(check(&name, 1).is_accepted(), "{name} should be accepted");
        }
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(check("A.PDF", 10).is_accepted());
        assert!(check("Photo.JpEg", 10).is_accepted());
    }

    #[test]
    fn rejects_unknown_and_missing_extensions() {
        assert_eq!(
            check("notes", 100),
            ValidationResult::Rejected(RejectReason::UnsupportedType)
        );
        assert_eq!(
            check("setup.exe", 100),
            ValidationResult::Rejected(RejectReason::UnsupportedType)
        );
        assert_eq!(
            check("resume.pdf.zip", 100),
            ValidationResult::Rejected(RejectReason::UnsupportedType)
        );
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        assert!(check("big.pdf", MAX_FILE_SIZE).is_accepted());
        assert_eq!(
            check("big.pdf", MAX_FILE_SIZE + 1),
            ValidationResult::Rejected(RejectReason::TooLarge)
        );
    }

    #[test]
    fn type_failure_short_circuits_size() {
        // Both checks fail; only the type failure is reported.
        assert_eq!(
            check("huge.exe", u64::MAX),
            ValidationResult::Rejected(RejectReason::UnsupportedType)
        );
    }

    #[test]
    fn configured_ceiling_applies() {
        let config = UploaderConfig {
            max_file_size: 1000,
            ..UploaderConfig::default()
        };
        assert!(validate_with(UploadCandidate::new("a.txt", 1000), &config).is_accepted());
        assert_eq!(
            validate_with(UploadCandidate::new("a.txt", 1001), &config),
            ValidationResult::Rejected(RejectReason::TooLarge)
        );
    }

    #[test]
    fn accept_attribute_lists_allowed_extensions() {
        let listed: Vec<&str> = ACCEPT_ATTRIBUTE.split(',').collect();
        assert_eq!(listed, ALLOWED_EXTENSIONS);
    }

    #[test]
    fn image_extensions_are_allowed() {
        for ext in IMAGE_EXTENSIONS {
            assert!(is_allowed_extension(ext), "{ext} must also be allowed");
        }
    }

    #[test]
    fn too_large_message_names_the_ceiling() {
        assert_eq!(
            RejectReason::TooLarge.user_message(MAX_FILE_SIZE),
            "File exceeds the size limit (max 10 MB)"
        );
    }

    #[test]
    fn into_result_maps_variants() {
        assert!(check("a.txt", 1).into_result().is_ok());
        assert_eq!(check("a", 1).into_result(), Err(RejectReason::UnsupportedType));
    }
}
