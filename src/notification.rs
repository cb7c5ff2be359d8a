//! Non-fatal diagnostics collected while reading.
//!
//! Decode failures abort the load; everything the reader can recover from
//! (unspecialized entity types, duplicate sequence numbers, records left
//! open at end of stream) is reported here instead of being silently
//! dropped.

use std::fmt;

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational, no action needed.
    Info,
    /// Something was skipped or approximated.
    Warning,
    /// A non-fatal error occurred.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationType::Info => write!(f, "INFO"),
            NotificationType::Warning => write!(f, "WARNING"),
            NotificationType::Error => write!(f, "ERROR"),
        }
    }
}

/// A single reader diagnostic.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Severity.
    pub notification_type: NotificationType,
    /// Human-readable description.
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)
    }
}

/// Ordered collection of diagnostics, carried on the document.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    notifications: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.notifications
            .push(Notification::new(notification_type, message));
    }

    /// Append an already-built notification.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Number of diagnostics recorded.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Iterate in recording order.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.notifications.iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.notifications.iter()
    }
}
