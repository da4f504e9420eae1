use super::{Notifier, Severity};
use std::io::Write;
use std::sync::Mutex;

/// Writes notifications as single lines to a terminal stream.
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn stderr() -> Self {
        Self::with_writer(Box::new(std::io::stderr()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, message: &str, severity: Severity) {
        let line = format_notification(title, message, severity);
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write notification: {}", e);
        }
    }
}

pub fn format_notification(title: &str, message: &str, severity: Severity) -> String {
    let marker = match severity {
        Severity::Destructive => "!",
    };
    format!("[{}] {}: {}", marker, title, message)
}
