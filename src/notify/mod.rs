//! User-facing notifications
//!
//! Validation and generation failures are reported through a [`Notifier`]
//! rather than inline text, so the controller never depends on a concrete
//! display surface.

pub mod console;
pub mod mock;

pub use console::ConsoleNotifier;
pub use mock::RecordingNotifier;

/// Visual weight of a notification. Every message this page raises is a
/// failure, so only the destructive style exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Destructive,
}

/// A single delivered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str, severity: Severity);
}
