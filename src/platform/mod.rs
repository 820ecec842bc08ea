//! Platform surfaces: the clipboard bridge and the notifier
//!
//! The submit flow reaches the host through these two seams. Each trait
//! ships a real backend and an in-memory stand-in, so engine-level tests
//! run without a window system or a clipboard daemon.

pub mod clipboard;
pub mod notify;

#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use clipboard::{ClipboardBridge, ClipboardLog, FailingClipboard, MemoryClipboard};
pub use notify::{LogNotifier, MemoryNotifier, NotificationLog, Notifier};
