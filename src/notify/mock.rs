use super::{Notification, Notifier, Severity};
use std::sync::{Arc, Mutex};

/// Keeps every notification in memory for later inspection.
#[derive(Clone)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn get_call_count(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().unwrap().last().cloned()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        self.notifications.lock().unwrap().push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            severity,
        });
    }
}
