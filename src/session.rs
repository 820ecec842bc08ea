//! The synchronous form session
//!
//! `FormSession` owns the field store, the rendered surface, the captured
//! image, and the submit state machine, and drives the
//! validate -> capture -> copy -> notify sequence against the injected
//! platform backends. The async facade in `async_api` wraps this type.

use std::sync::Arc;

use log::{debug, error};

use crate::capture::capture_form;
use crate::error::{Error, Result};
use crate::form::{Field, FieldStore, FormValues, ValidationErrors};
use crate::platform::clipboard::ClipboardBridge;
use crate::platform::notify::Notifier;
use crate::rendering::tree::{build_surface, Element, ElementTree, SurfaceState};
use crate::{FormConfig, TextSnapshot};

/// Notification shown when a submit-time clipboard write succeeds
pub const SUBMIT_COPIED_MESSAGE: &str = "Screenshot copied to clipboard!";
/// Notification shown when a copy-again write succeeds
pub const COPY_AGAIN_MESSAGE: &str = "Base64 image copied to clipboard!";

/// Stages of the submit flow.
///
/// Every submit starts in `Validating` and ends back in `Idle`; the stage
/// before the return to `Idle` tells the outcome apart. Transitions are
/// observable through `FormSession::on_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    /// Validation failed; nothing was captured
    Invalid,
    Capturing,
    /// Rasterization failed; nothing was stored or copied
    CaptureFailed,
    Copying,
    /// The clipboard write failed; the captured image is kept
    CopyFailed,
    /// Captured, copied, and notified
    Done,
}

/// Which terminal arm a submit ended in, as returned by `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the per-field messages stay on the surface
    Invalid(ValidationErrors),
    /// Rasterization failed; no image was stored and nothing was copied
    CaptureFailed,
    /// The image was captured and stored but the clipboard write failed
    CopyFailed,
    /// Captured, copied, and notified
    Done,
}

type OnStateHandler = Arc<dyn Fn(SubmitState) + Send + Sync>;

/// A synchronous form session.
///
/// Holds the live field values, re-renders the surface after every change,
/// and runs the submit flow. Failures inside the flow are reported through
/// the returned `SubmitOutcome` and the log facade, never the notifier, so
/// a session survives failed submits and stays editable.
pub struct FormSession {
    config: FormConfig,
    store: FieldStore,
    surface: ElementTree,
    surface_attached: bool,
    captured_image: Option<String>,
    state: SubmitState,
    is_submitting: bool,
    clipboard: Box<dyn ClipboardBridge>,
    notifier: Box<dyn Notifier>,
    on_state: Option<OnStateHandler>,
}

impl FormSession {
    /// Create a session over explicit backends.
    ///
    /// Rejects configurations no surface can be rendered for: a viewport
    /// without area or empty button labels.
    pub fn with_backends(
        config: FormConfig,
        clipboard: Box<dyn ClipboardBridge>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self> {
        if config.viewport.width == 0 || config.viewport.height == 0 {
            return Err(Error::ConfigError(
                "viewport must have a non-zero area".to_string(),
            ));
        }
        if config.submit_label.is_empty() || config.copy_label.is_empty() {
            return Err(Error::ConfigError(
                "button labels must not be empty".to_string(),
            ));
        }

        let store = FieldStore::new();
        let surface = build_surface(&SurfaceState {
            values: store.values(),
            errors: store.errors(),
            is_submitting: false,
            captured: None,
            config: &config,
        });

        Ok(Self {
            config,
            store,
            surface,
            surface_attached: true,
            captured_image: None,
            state: SubmitState::Idle,
            is_submitting: false,
            clipboard,
            notifier,
            on_state: None,
        })
    }

    /// The configuration this session was created with
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Overwrite one field value; revalidates and re-renders the surface.
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.store.set(field, value);
        self.redraw();
    }

    /// Current field values
    pub fn values(&self) -> &FormValues {
        self.store.values()
    }

    /// Current validation state, one entry per failing field
    pub fn errors(&self) -> &ValidationErrors {
        self.store.errors()
    }

    /// Whether a submit flow is in progress
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// The current submit stage; `Idle` between submits
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// The last captured data URL, if any. Overwritten by each successful
    /// capture; a failed capture leaves the previous value in place.
    pub fn captured_image(&self) -> Option<&str> {
        self.captured_image.as_deref()
    }

    /// The currently rendered surface
    pub fn surface(&self) -> &ElementTree {
        &self.surface
    }

    /// Mark the rendered surface as no longer attached to a live page, as
    /// when the form's subtree is torn down between render and capture.
    /// Subsequent captures fail; there is no re-attach.
    pub fn detach_surface(&mut self) {
        self.surface_attached = false;
        self.surface.detach();
    }

    /// Register a callback invoked after every field mutation with the
    /// fresh values and errors. Replaces any previous callback.
    pub fn on_change<F>(&mut self, cb: F)
    where
        F: Fn(&FormValues, &ValidationErrors) + Send + Sync + 'static,
    {
        self.store.on_change(cb);
    }

    /// Remove the field-change callback if any
    pub fn clear_on_change(&mut self) {
        self.store.clear_on_change();
    }

    /// Register a callback invoked on every submit-state transition.
    /// Replaces any previous callback.
    pub fn on_state<F>(&mut self, cb: F)
    where
        F: Fn(SubmitState) + Send + Sync + 'static,
    {
        self.on_state = Some(Arc::new(cb));
    }

    /// Remove the submit-state callback if any
    pub fn clear_on_state(&mut self) {
        self.on_state = None;
    }

    /// Run the submit flow: validate, capture the form subtree, write the
    /// data URL to the clipboard, notify on success.
    ///
    /// Validation failures and capture/copy failures are reported through
    /// the returned outcome, not as errors; the flow failures are also
    /// logged. `Err` is reserved for calling into a session whose submit
    /// control is disabled because a flow is already in progress.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.is_submitting {
            return Err(Error::Other(
                "a submission is already in progress".to_string(),
            ));
        }

        self.is_submitting = true;
        self.set_state(SubmitState::Validating);

        let errors = self.store.errors().clone();
        if !errors.is_empty() {
            self.set_state(SubmitState::Invalid);
            self.finish_flow();
            return Ok(SubmitOutcome::Invalid(errors));
        }

        self.set_state(SubmitState::Capturing);
        // Captures see the in-flight surface, disabled submit button included.
        self.redraw();
        let data_url = match capture_form(&self.surface, &self.config) {
            Ok(shot) => shot.to_data_url(),
            Err(e) => {
                error!("capture failed: {}", e);
                self.set_state(SubmitState::CaptureFailed);
                self.finish_flow();
                return Ok(SubmitOutcome::CaptureFailed);
            }
        };

        self.captured_image = Some(data_url.clone());
        self.set_state(SubmitState::Copying);
        match self.clipboard.write_text(&data_url) {
            Ok(()) => {
                debug!("submit copied {} chars to the clipboard", data_url.len());
                self.notifier.notify(SUBMIT_COPIED_MESSAGE);
                self.set_state(SubmitState::Done);
                self.finish_flow();
                Ok(SubmitOutcome::Done)
            }
            Err(e) => {
                error!("clipboard write failed: {}", e);
                self.set_state(SubmitState::CopyFailed);
                self.finish_flow();
                Ok(SubmitOutcome::CopyFailed)
            }
        }
    }

    /// Write the stored data URL to the clipboard again.
    ///
    /// Errors when no capture exists or when the clipboard write fails; a
    /// failed write is logged and leaves the stored image untouched.
    pub fn copy_again(&mut self) -> Result<()> {
        let data_url = match &self.captured_image {
            Some(url) => url.clone(),
            None => return Err(Error::Other("no captured image to copy".to_string())),
        };
        match self.clipboard.write_text(&data_url) {
            Ok(()) => {
                self.notifier.notify(COPY_AGAIN_MESSAGE);
                Ok(())
            }
            Err(e) => {
                error!("copy-again clipboard write failed: {}", e);
                Err(e)
            }
        }
    }

    /// A textual snapshot of the surface: the page heading as title, the
    /// remaining visible text (masking applied) as body.
    pub fn text_snapshot(&self) -> TextSnapshot {
        let mut lines = Vec::new();
        if let Element::Panel { children, .. } = self.surface.root() {
            for child in children {
                // The page heading becomes the snapshot title.
                if matches!(child, Element::Heading { .. }) {
                    continue;
                }
                let text = child.text_content();
                if !text.is_empty() {
                    lines.push(text);
                }
            }
        }
        TextSnapshot {
            title: self.config.heading.clone(),
            text: lines.join("\n"),
        }
    }

    /// Close the session. Field values and the captured image do not
    /// survive it.
    pub fn close(self) -> Result<()> {
        debug!("form session closed");
        Ok(())
    }

    fn set_state(&mut self, state: SubmitState) {
        self.state = state;
        debug!("submit state -> {:?}", state);
        if let Some(cb) = &self.on_state {
            cb(state);
        }
    }

    /// Re-enable the submit control, refresh the surface, and return the
    /// machine to `Idle`.
    fn finish_flow(&mut self) {
        self.is_submitting = false;
        self.redraw();
        self.set_state(SubmitState::Idle);
    }

    fn redraw(&mut self) {
        let mut tree = build_surface(&SurfaceState {
            values: self.store.values(),
            errors: self.store.errors(),
            is_submitting: self.is_submitting,
            captured: self.captured_image.as_deref(),
            config: &self.config,
        });
        if !self.surface_attached {
            tree.detach();
        }
        self.surface = tree;
    }
}
