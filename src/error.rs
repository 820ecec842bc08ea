//! Error types for the form-capture engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the form-capture engine
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to rasterize or encode the form subtree
    #[error("Capture failed: {0}")]
    CaptureError(String),

    /// Failed to write to the clipboard
    #[error("Clipboard write failed: {0}")]
    ClipboardError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
