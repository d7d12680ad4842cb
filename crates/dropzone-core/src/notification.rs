//! Transient toast notifications, one visible at a time.

use serde::{Deserialize, Serialize};

use crate::types::NotificationId;

/// Severity of a notification, which selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// An operation succeeded.
    Success,
    /// An operation was refused.
    Error,
    /// A precondition was not met.
    Warning,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Lowercase name, used as a CSS modifier class (`notification-success`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// A message for the toast sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identity used to match auto-dismiss timers.
    pub id: NotificationId,
    /// Text shown to the user.
    pub message: String,
    /// Severity of the message.
    pub severity: Severity,
}

/// Holds the single visible notification.
///
/// Showing a new notification replaces the current one. Dismissal is by
/// id, so a timer started for a toast that has since been replaced does
/// not remove its successor.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    visible: Option<Notification>,
    last_id: u64,
}

impl NotificationCenter {
    /// An empty notification center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification currently on screen.
    #[must_use]
    pub const fn visible(&self) -> Option<&Notification> {
        self.visible.as_ref()
    }

    /// The notification `id`, if it is still on screen.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.visible.as_ref().filter(|n| n.id == id)
    }

    /// Show `message`, replacing anything currently visible.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> &Notification {
        self.last_id += 1;
        self.visible.insert(Notification {
            id: NotificationId(self.last_id),
            message: message.into(),
            severity,
        })
    }

    /// Remove the notification `id` if it is still the visible one.
    ///
    /// Returns `true` if something was removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.visible.as_ref().is_some_and(|n| n.id == id) {
            self.visible = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn newest_replaces_visible() {
        let mut center = NotificationCenter::new();
        let first = center.show("one", Severity::Info).id;
        let second = center.show("two", Severity::Error).id;
        assert_ne!(first, second);

        let visible = center.visible().unwrap();
        assert_eq!(visible.message, "two");
        assert_eq!(visible.severity, Severity::Error);
    }

    #[test]
    fn stale_dismiss_keeps_newer_toast() {
        let mut center = NotificationCenter::new();
        let first = center.show("one", Severity::Info).id;
        let second = center.show("two", Severity::Success).id;

        assert!(!center.dismiss(first));
        assert_eq!(center.visible().unwrap().id, second);

        assert!(center.dismiss(second));
        assert!(center.visible().is_none());
    }

    #[test]
    fn lookup_by_id_ignores_replaced_toast() {
        let mut center = NotificationCenter::new();
        let first = center.show("one", Severity::Info).id;
        assert_eq!(center.get(first).unwrap().message, "one");

        let second = center.show("two", Severity::Warning).id;
        assert!(center.get(first).is_none());
        assert_eq!(center.get(second).unwrap().message, "two");
    }

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Warning.as_str(), "warning");
    }
}
