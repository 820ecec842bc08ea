//! Capture service: rasterize the form subtree to a PNG screenshot
//!
//! `capture_form` is the single-attempt rasterization step of the submit
//! flow. It scopes the capture to the form panel, so the page heading and
//! the result panel never appear in captured images.

use log::debug;

use crate::error::{Error, Result};
use crate::rendering::tree::ElementTree;
use crate::rendering::{render_element, Screenshot};
use crate::FormConfig;

/// Rasterize the form subtree of `tree` at the configured viewport width.
///
/// Fails with `Error::CaptureError` when the tree is detached, when it has
/// no form panel, or when the viewport has no area. One attempt, no retry;
/// the caller decides how to recover.
pub fn capture_form(tree: &ElementTree, config: &FormConfig) -> Result<Screenshot> {
    if !tree.is_attached() {
        return Err(Error::CaptureError(
            "surface is detached from the page".to_string(),
        ));
    }
    if config.viewport.width == 0 || config.viewport.height == 0 {
        return Err(Error::CaptureError("viewport has no area".to_string()));
    }
    let form = tree
        .form_root()
        .ok_or_else(|| Error::CaptureError("surface has no form panel".to_string()))?;

    let shot = render_element(form, config.viewport, &config.theme)?;
    debug!(
        "captured form subtree: {}x{}, {} PNG bytes",
        shot.width,
        shot.height,
        shot.png_data.len()
    );
    Ok(shot)
}
