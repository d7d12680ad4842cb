//! Browser file handles and preview reads.

use dioxus::html::FileData;
use dropzone_core::{FileSource, Preview, SelectionId, UploadCandidate, probe_dimensions};

use crate::blob::{self, BlobError};

/// Adapter exposing a picker or drop [`FileData`] as a [`FileSource`].
pub struct BrowserFile<'a>(pub &'a FileData);

impl FileSource for BrowserFile<'_> {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn size_bytes(&self) -> u64 {
        self.0.size()
    }
}

/// Normalize a browser file into an upload candidate.
#[must_use]
pub fn candidate(file: &FileData) -> UploadCandidate {
    UploadCandidate::from_source(&BrowserFile(file))
}

/// Errors that can occur while reading a preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The file contents could not be read.
    #[error("failed to read file: {0}")]
    Read(String),

    /// The Blob URL could not be created.
    #[error(transparent)]
    Blob(#[from] BlobError),
}

/// Read `file` into a [`Preview`] for `selection`.
///
/// The preview's `src` is a Blob URL owned by the caller.
///
/// # Errors
///
/// Returns [`PreviewError::Read`] if the bytes cannot be read and
/// [`PreviewError::Blob`] if the Blob URL cannot be created.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_preview(
    file: FileData,
    selection: SelectionId,
    candidate: &UploadCandidate,
) -> Result<Preview, PreviewError> {
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| PreviewError::Read(e.to_string()))?;
    let dimensions = probe_dimensions(&bytes);
    let src = blob::bytes_to_blob_url(&bytes, candidate.mime_type())?;
    Ok(Preview {
        selection,
        src,
        title: candidate.name().to_owned(),
        dimensions,
    })
}
