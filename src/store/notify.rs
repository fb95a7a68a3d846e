//! User-facing notification contract.
//!
//! The presentation layer renders these as toasts; the engine only emits
//! them. No delivery mechanism lives here.

use std::sync::{Arc, Mutex};

/// How prominently a notification should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information.
    Info,
    /// A mutation completed.
    Success,
    /// A mutation failed.
    Error,
}

/// A sink accepting user-facing feedback about engine actions.
pub trait NotificationSink {
    /// Delivers one notification.
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// A sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _title: &str, _message: &str, _severity: Severity) {}
}

/// A sink that forwards notifications to `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::error!(title, "{message}"),
            Severity::Info | Severity::Success => tracing::info!(title, "{message}"),
        }
    }
}

/// One captured notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    /// The notification title.
    pub title: String,
    /// The notification body.
    pub message: String,
    /// The severity it was emitted with.
    pub severity: Severity,
}

/// A sink that records every notification, for asserting on feedback in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingSink {
    /// Creates an empty recording sink. Clones share the same buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        let mut notices = self.notices.lock().unwrap_or_else(|e| e.into_inner());
        notices.push(Notice {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        });
    }
}
