//! Formshot
//!
//! A headless signup-form capture engine for Rust. It models a single-page
//! form (name / email / password / confirm-password), validates presence and
//! password match on every edit and on submit, rasterizes the form subtree to
//! a PNG, encodes it as a `data:image/png;base64,...` data URL, and writes
//! that data URL to the clipboard.
//!
//! # Features
//!
//! - **System clipboard** (default): writes captures to the OS clipboard via
//!   `arboard`; disable the `system-clipboard` feature for a purely
//!   in-process clipboard
//! - **Deterministic raster**: software scanline fills plus 8x8 bitmap
//!   glyphs, so identical session state always produces identical PNG bytes
//!
//! # Example
//!
//! ```no_run
//! use formshot::{Field, FormConfig, SubmitOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = formshot::new_session(FormConfig::default())?;
//! session.set_field(Field::Name, "Al");
//! session.set_field(Field::Email, "a@b.com");
//! session.set_field(Field::Password, "hunter2");
//! session.set_field(Field::ConfirmPassword, "hunter2");
//!
//! match session.submit()? {
//!     SubmitOutcome::Done => {
//!         let data_url = session.captured_image().unwrap();
//!         println!("captured {} chars", data_url.len());
//!     }
//!     other => eprintln!("submit ended in {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// Form state: field identifiers, values, validation, the field store
pub mod form;

// Rendering pipeline: element tree -> layout -> paint -> raster -> PNG
pub mod rendering;

// Capture service over the rendered form subtree
pub mod capture;

// Platform surfaces: clipboard bridges and the notifier
pub mod platform;

// Synchronous session: field store + submit state machine + capture/copy flow
pub mod session;

// Async-friendly session API (simple worker-backed abstraction)
pub mod async_api;

pub use async_api::AsyncSession;
pub use form::{Field, FieldStore, FormValues, ValidationErrors};
pub use rendering::Screenshot;
pub use session::{FormSession, SubmitOutcome, SubmitState};

/// RGBA color used by the theme and the painter
pub type Rgba = (u8, u8, u8, u8);

/// Configuration for a form session
///
/// The defaults mirror the plain signup form this engine models: a light
/// theme, a 480px-wide viewport, and the stock heading and button labels.
/// Text is rendered from the 8x8 basic glyph set, so labels outside ASCII
/// rasterize as blanks.
///
/// # Examples
///
/// ```
/// let cfg = formshot::FormConfig::default();
/// assert_eq!(cfg.heading, "Form Screenshot to Base64");
/// assert_eq!(cfg.viewport.width, 480);
/// ```
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Page heading shown above the form
    pub heading: String,
    /// Label on the submit button
    pub submit_label: String,
    /// Heading shown above the result panel
    pub output_heading: String,
    /// Label on the result panel's copy-again button
    pub copy_label: String,
    /// Viewport dimensions; captures use the full width, height grows with content
    pub viewport: Viewport,
    /// Colors used by the painter
    pub theme: Theme,
    /// Character shown in place of masked input text
    pub mask_char: char,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            heading: "Form Screenshot to Base64".to_string(),
            submit_label: "Submit and Copy Screenshot".to_string(),
            output_heading: "Base64 Screenshot:".to_string(),
            copy_label: "Copy Base64 Image".to_string(),
            viewport: Viewport::default(),
            theme: Theme::default(),
            mask_char: '*',
        }
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 480,
            height: 640,
        }
    }
}

/// Colors used when painting the surface
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background
    pub background: Rgba,
    /// Default text (heading, labels, input values)
    pub text: Rgba,
    /// Input and text-area borders
    pub border: Rgba,
    /// Input and text-area interior
    pub input_background: Rgba,
    /// Inline validation messages
    pub error_text: Rgba,
    /// Button face
    pub button_face: Rgba,
    /// Button face while a submission is in flight
    pub button_face_disabled: Rgba,
    /// Button label
    pub button_text: Rgba,
    /// Button label while a submission is in flight
    pub button_text_disabled: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: (255, 255, 255, 255),
            text: (0, 0, 0, 255),
            border: (136, 136, 136, 255),
            input_background: (255, 255, 255, 255),
            error_text: (204, 0, 0, 255),
            button_face: (229, 229, 229, 255),
            button_face_disabled: (243, 243, 243, 255),
            button_text: (0, 0, 0, 255),
            button_text_disabled: (145, 145, 145, 255),
        }
    }
}

/// A textual snapshot of the rendered surface
///
/// Returned by `FormSession::text_snapshot` and the async facade. Contains
/// the page heading and the visible text of the surface (labels, values with
/// masking applied, error lines, button labels, and the result panel content
/// once a capture exists), suitable for textual tests and quick inspection.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TextSnapshot {
    /// Page heading
    pub title: String,
    /// Visible text content, one line per element
    pub text: String,
}

/// Create a new form session with the default backends
///
/// With the `system-clipboard` feature enabled (default) this writes
/// captures to the OS clipboard; otherwise an in-process clipboard is used.
/// Success notifications go to the `log` facade either way.
#[cfg(feature = "system-clipboard")]
pub fn new_session(config: FormConfig) -> Result<FormSession> {
    let clipboard = platform::clipboard::SystemClipboard::new()?;
    FormSession::with_backends(
        config,
        Box::new(clipboard),
        Box::new(platform::notify::LogNotifier::new()),
    )
}

#[cfg(not(feature = "system-clipboard"))]
pub fn new_session(config: FormConfig) -> Result<FormSession> {
    FormSession::with_backends(
        config,
        Box::new(platform::clipboard::MemoryClipboard::new()),
        Box::new(platform::notify::LogNotifier::new()),
    )
}
