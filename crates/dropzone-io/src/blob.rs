//! Object URLs for preview images.
//!
//! An accepted image's bytes are wrapped in a `Blob` tagged with the
//! file's MIME type; the resulting `blob:` URL feeds both the inline
//! preview and the viewer.

use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Failure from the Blob or URL browser APIs.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The browser rejected the call.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Wrap `bytes` in a `Blob` of type `mime_type` and return its URL.
///
/// Each URL pins its blob in memory until [`revoke_blob_url`] is called.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if the browser refuses to build the
/// blob or its URL.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    Ok(Url::create_object_url_with_blob(&blob)?)
}

/// Release a URL made by [`bytes_to_blob_url`].
///
/// Revoking an unknown or already revoked URL is harmless, so errors are
/// dropped.
pub fn revoke_blob_url(url: &str) {
    let _ = Url::revoke_object_url(url);
}
