//! Transient user notifications.

use log::{error, info};

/// Shown after the resume reached the user.
pub const DOWNLOAD_SUCCESS: &str = "Resume downloaded successfully!";
/// Shown for any generation or delivery failure.
pub const DOWNLOAD_FAILURE: &str = "Failed to generate PDF. Please try again.";
/// Shown after the contact form was submitted.
pub const CONTACT_SUCCESS: &str = "Message sent successfully! I'll get back to you soon.";

/// Receives short-lived success and failure messages.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
}

/// Notifier that writes to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&mut self, message: &str) {
        info!("{}", message);
    }

    fn failure(&mut self, message: &str) {
        error!("{}", message);
    }
}

/// Notifier that keeps every message, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingNotifier {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_owned());
    }

    fn failure(&mut self, message: &str) {
        self.failures.push(message.to_owned());
    }
}
