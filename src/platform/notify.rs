//! User-facing notifications
//!
//! Success alerts go through a `Notifier`. Failures never do: error
//! reporting stays on the log facade, so the absence of a success alert is
//! the only user-visible sign that a flow went wrong.

use std::sync::{Arc, Mutex};

use log::info;

/// Surface a short user-facing message.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that reports through the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        LogNotifier
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}

/// Shared view of the messages recorded by a `MemoryNotifier`.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl NotificationLog {
    /// Every message so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// Notifier that records messages in memory, for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    log: NotificationLog,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for inspecting recorded messages after the notifier is boxed
    pub fn log(&self) -> NotificationLog {
        self.log.clone()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, message: &str) {
        self.log.entries.lock().unwrap().push(message.to_string());
    }
}
