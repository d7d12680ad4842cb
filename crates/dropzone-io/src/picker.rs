//! Opening the native file picker programmatically.
//!
//! The hidden `<input type="file">` rendered by
//! [`UploadZone`](crate::UploadZone) is looked up by id and clicked, so
//! the picker can be opened from a keyboard handler as well as a click.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// DOM id of the hidden file input.
pub const FILE_INPUT_ID: &str = "dropzone-file-input";

/// Errors that can occur when opening the picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PickerError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Click the file input with id [`FILE_INPUT_ID`].
///
/// # Errors
///
/// Returns [`PickerError::JsError`] if the window, document, or input
/// element is unavailable.
pub fn open_file_picker() -> Result<(), PickerError> {
    let window =
        web_sys::window().ok_or_else(|| PickerError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| PickerError::JsError("no document".into()))?;
    let input: web_sys::HtmlElement = document
        .get_element_by_id(FILE_INPUT_ID)
        .ok_or_else(|| PickerError::JsError(format!("no element #{FILE_INPUT_ID}")))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|e| PickerError::JsError(format!("failed to cast element: {e:?}")))?;
    input.click();
    Ok(())
}
