//! Document-wide key listening.
//!
//! Element `onkeydown` handlers only see keys while the element has
//! focus. [`DocumentKeys`] listens on `document` instead and forwards key
//! names over a channel, so a Dioxus task can react to them.

use futures::channel::mpsc::{self, UnboundedReceiver};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, KeyboardEvent};

/// Errors that can occur when attaching the listener.
#[derive(Debug, thiserror::Error)]
pub enum KeyListenerError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for KeyListenerError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A `keydown` listener on the document, removed when dropped.
pub struct DocumentKeys {
    document: Document,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl DocumentKeys {
    /// Start listening. Every key pressed anywhere in the page arrives on
    /// the returned receiver as its `KeyboardEvent.key` name.
    ///
    /// # Errors
    ///
    /// Returns [`KeyListenerError::JsError`] if there is no document or the
    /// listener cannot be attached.
    pub fn listen() -> Result<(Self, UnboundedReceiver<String>), KeyListenerError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| KeyListenerError::JsError("no document".into()))?;

        let (tx, rx) = mpsc::unbounded();
        let callback = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            // The receiver is gone only after the listener is detached.
            let _ = tx.unbounded_send(event.key());
        });
        document.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())?;

        Ok((Self { document, callback }, rx))
    }
}

impl Drop for DocumentKeys {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}
