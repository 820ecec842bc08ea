//! Clipboard bridges
//!
//! `ClipboardBridge` is the seam between the submit flow and the host
//! clipboard. The OS-backed bridge sits behind the `system-clipboard`
//! feature; the in-memory and always-failing bridges drive tests and
//! headless runs without a clipboard daemon.

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Write strings to a clipboard.
///
/// A write is a single attempt: no retry, no queueing. A failed write
/// surfaces as `Error::ClipboardError` and leaves the clipboard contents
/// unspecified.
pub trait ClipboardBridge {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard bridge backed by `arboard`.
///
/// Construction fails when no clipboard is reachable (for example on a
/// display-less host); both construction and write failures surface as
/// `Error::ClipboardError`.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| Error::ClipboardError(format!("{}", e)))?;
        Ok(Self { clipboard })
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardBridge for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| Error::ClipboardError(format!("{}", e)))
    }
}

/// Shared view of the writes recorded by a `MemoryClipboard`.
///
/// Clones observe the same underlying list, so a log handle taken before
/// the bridge is boxed into a session stays usable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ClipboardLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl ClipboardLog {
    /// Every write so far, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// The most recent write, i.e. what is "on" the clipboard
    pub fn last(&self) -> Option<String> {
        self.entries.lock().unwrap().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// In-process clipboard bridge that records every write and always succeeds.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    log: ClipboardLog,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for inspecting recorded writes after the bridge is boxed
    pub fn log(&self) -> ClipboardLog {
        self.log.clone()
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.log.entries.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clipboard bridge that rejects every write, for driving the copy-failure
/// paths of the submit flow.
#[derive(Debug)]
pub struct FailingClipboard {
    reason: String,
}

impl FailingClipboard {
    pub fn new() -> Self {
        Self {
            reason: "clipboard unavailable".to_string(),
        }
    }

    pub fn with_reason(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl Default for FailingClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBridge for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(Error::ClipboardError(self.reason.clone()))
    }
}
