//! Transient user notifications
//!
//! The core emits `(message, severity)` pairs; whatever hosts it decides how
//! to show and dismiss them. There is no acknowledgment channel and the
//! auto-dismiss timer is a presentation concern.

use serde::{Deserialize, Serialize};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Error,
}

/// A transient notification for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Receiver of notifications
///
/// The session engine pushes into whatever sink the host provides; tests
/// use `VecSink` and assert on its contents.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// A sink that simply collects notifications in order
#[derive(Debug, Default)]
pub struct VecSink {
    pub notifications: Vec<Notification>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last notification received, if any
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl NotificationSink for VecSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink = VecSink::new();
        sink.notify(Notification::success("Registered"));
        sink.notify(Notification::error("Missing fields"));

        assert_eq!(sink.notifications.len(), 2);
        assert_eq!(sink.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_constructors_set_severity() {
        assert_eq!(Notification::success("ok").severity, Severity::Success);
        assert_eq!(Notification::error("no").severity, Severity::Error);
    }
}
