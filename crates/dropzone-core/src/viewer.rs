//! Full-screen image viewer overlay state.

/// User input while the viewer is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerInput {
    /// The close button was pressed.
    CloseButton,
    /// A click landed on the dimmed backdrop outside the content.
    BackdropClick,
    /// A click landed on the image or its caption.
    ContentClick,
    /// A key was pressed; the value is the DOM `KeyboardEvent.key` name.
    Key(String),
}

impl ViewerInput {
    /// Whether this input dismisses the viewer.
    #[must_use]
    pub fn closes(&self) -> bool {
        match self {
            Self::CloseButton | Self::BackdropClick => true,
            Self::ContentClick => false,
            Self::Key(key) => key == "Escape",
        }
    }
}

/// What the open viewer displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerContent {
    /// Image source.
    pub src: String,
    /// Caption, the file name.
    pub title: String,
}

/// Open/closed state of the viewer overlay.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    content: Option<ViewerContent>,
}

impl Viewer {
    /// The content on screen, if the viewer is open.
    #[must_use]
    pub const fn content(&self) -> Option<&ViewerContent> {
        self.content.as_ref()
    }

    /// Whether the overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Open (or retarget) the viewer.
    pub fn open(&mut self, src: impl Into<String>, title: impl Into<String>) {
        self.content = Some(ViewerContent {
            src: src.into(),
            title: title.into(),
        });
    }

    /// Close unconditionally.
    pub fn close(&mut self) {
        self.content = None;
    }

    /// Apply user input. Returns `true` if the viewer closed.
    pub fn handle(&mut self, input: &ViewerInput) -> bool {
        if self.is_open() && input.closes() {
            self.close();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_viewer() -> Viewer {
        let mut viewer = Viewer::default();
        viewer.open("blob:1", "photo.png");
        viewer
    }

    #[test]
    fn close_button_backdrop_and_escape_close() {
        for input in [
            ViewerInput::CloseButton,
            ViewerInput::BackdropClick,
            ViewerInput::Key("Escape".into()),
        ] {
            let mut viewer = open_viewer();
            assert!(viewer.handle(&input), "{input:?} should close the viewer");
            assert!(!viewer.is_open());
        }
    }

    #[test]
    fn content_click_and_other_keys_keep_it_open() {
        let mut viewer = open_viewer();
        assert!(!viewer.handle(&ViewerInput::ContentClick));
        assert!(!viewer.handle(&ViewerInput::Key("Enter".into())));
        assert!(viewer.is_open());
        assert_eq!(viewer.content().map(|c| c.title.as_str()), Some("photo.png"));
    }

    #[test]
    fn input_on_closed_viewer_is_ignored() {
        let mut viewer = Viewer::default();
        assert!(!viewer.handle(&ViewerInput::Key("Escape".into())));
    }
}
