//! User-visible notices
//!
//! A `Notifier` is fire-and-forget: callers never wait on it and never
//! learn whether the notice was shown.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::Logger;

/// Sink for user-visible notices
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
}

/// Notifier that drops every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn info(&self, _message: &str) {}
}

/// Notifier that forwards notices to a logger, for headless hosts
pub struct LoggingNotifier {
    logger: Arc<dyn Logger>,
}

impl LoggingNotifier {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Notifier for LoggingNotifier {
    fn info(&self, message: &str) {
        self.logger.info(&format!("[Notice] {}", message));
    }
}

/// Notifier that remembers every notice it was given
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
