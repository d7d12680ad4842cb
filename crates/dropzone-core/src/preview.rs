//! Image preview lifecycle.
//!
//! Reading a file for preview is asynchronous and cannot be interrupted,
//! so a read may finish after its file was removed or replaced. The
//! [`PreviewSlot`] remembers which selection it is waiting for and hands
//! late deliveries back to the caller instead of showing them. The
//! caller owns whatever resource backs [`Preview::src`] (a Blob URL in
//! the browser) and releases it.

use std::io::Cursor;

use crate::types::{Dimensions, SelectionId};

/// A decoded, displayable rendering of an accepted image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Selection the preview was read for.
    pub selection: SelectionId,
    /// Displayable source, e.g. an object URL.
    pub src: String,
    /// File name, used as alt text and viewer title.
    pub title: String,
    /// Pixel size, when the image header could be probed.
    pub dimensions: Option<Dimensions>,
}

/// What the preview area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    /// Nothing.
    #[default]
    Hidden,
    /// Waiting for the read started for this selection.
    Loading(SelectionId),
    /// A preview is on screen.
    Ready(Preview),
}

/// Holder for the single inline preview.
#[derive(Debug, Clone, Default)]
pub struct PreviewSlot {
    state: PreviewState,
}

impl PreviewSlot {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &PreviewState {
        &self.state
    }

    /// The preview on screen, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&Preview> {
        match &self.state {
            PreviewState::Ready(preview) => Some(preview),
            _ => None,
        }
    }

    /// Whether a read for `selection` is outstanding.
    #[must_use]
    pub fn is_loading(&self, selection: SelectionId) -> bool {
        self.state == PreviewState::Loading(selection)
    }

    /// Start waiting for `selection`.
    ///
    /// Returns the preview that was on screen, for release.
    pub fn begin(&mut self, selection: SelectionId) -> Option<Preview> {
        match std::mem::replace(&mut self.state, PreviewState::Loading(selection)) {
            PreviewState::Ready(old) => Some(old),
            _ => None,
        }
    }

    /// Hide the preview and stop waiting for any read.
    ///
    /// Returns the preview that was on screen, for release.
    pub fn clear(&mut self) -> Option<Preview> {
        match std::mem::take(&mut self.state) {
            PreviewState::Ready(old) => Some(old),
            _ => None,
        }
    }

    /// Deliver a finished read.
    ///
    /// # Errors
    ///
    /// Gives the preview back when the slot is not waiting for its
    /// selection; the caller must release it.
    pub fn deliver(&mut self, preview: Preview) -> Result<(), Preview> {
        if !self.is_loading(preview.selection) {
            return Err(preview);
        }
        self.state = PreviewState::Ready(preview);
        Ok(())
    }

    /// Record a failed read.
    ///
    /// Returns `true` if the slot was waiting for `selection`.
    pub fn fail(&mut self, selection: SelectionId) -> bool {
        if self.is_loading(selection) {
            self.state = PreviewState::Hidden;
            true
        } else {
            false
        }
    }
}

/// Read the pixel size from an image header without decoding the pixels.
///
/// Returns `None` for formats the `image` crate cannot identify (SVG
/// among them) and for corrupt data.
#[must_use]
pub fn probe_dimensions(bytes: &[u8]) -> Option<Dimensions> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?;
    let (width, height) = reader.into_dimensions().ok()?;
    Some(Dimensions { width, height })
}
