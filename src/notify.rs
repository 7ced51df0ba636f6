//! Acknowledgement capability
//!
//! Stubbed actions (login, search, menu entries, list rows) report back to the
//! user through a `Notifier` handed in by the host instead of popping a dialog
//! themselves.

/// Sink for acknowledgement messages
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Notifier that keeps every message, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
