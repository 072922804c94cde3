//! User-facing notifications raised by management screens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A message for the presentation layer, e.g. a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Receiver of screen notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

impl<F: FnMut(Notification)> Notifier for F {
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Writes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => log::info!("{}", notification.message),
            NotificationLevel::Error => log::warn!("{}", notification.message),
        }
    }
}

/// Buffers notifications until the host drains them.
#[derive(Debug, Clone, Default)]
pub struct QueueNotifier {
    pending: Vec<Notification>,
}

impl QueueNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

impl Notifier for QueueNotifier {
    fn notify(&mut self, notification: Notification) {
        self.pending.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drain() {
        let mut queue = QueueNotifier::new();
        queue.notify(Notification::success("Saved"));
        queue.notify(Notification::error("Nope"));
        assert_eq!(queue.pending().len(), 2);

        let drained = queue.drain();
        assert!(drained[1].is_error());
        assert!(queue.pending().is_empty());
    }

    #[test]
    fn test_closure_notifier() {
        let mut seen = Vec::new();
        {
            let mut notifier = |n: Notification| seen.push(n.message);
            notifier.notify(Notification::success("one"));
        }
        assert_eq!(seen, vec!["one".to_string()]);
    }
}
