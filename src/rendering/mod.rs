//! Rendering pipeline: element tree -> layout -> paint -> raster -> PNG
//!
//! `render_element` runs the whole pipeline for one subtree. Output width is
//! the viewport width; output height is whatever the laid-out content needs.

pub mod layout;
pub mod paint;
pub mod raster;
pub mod tree;

use base64::Engine as Base64Engine;

use crate::error::{Error, Result};
use crate::{Theme, Viewport};
use tree::Element;

/// Prefix of every encoded capture
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// A rasterized capture of a surface subtree
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Encode the PNG bytes as a `data:image/png;base64,...` string
    pub fn to_data_url(&self) -> String {
        format!(
            "{}{}",
            DATA_URL_PREFIX,
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }
}

/// Decode the PNG bytes out of a `data:image/png;base64,...` string.
pub fn png_from_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = data_url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| Error::Other("not a PNG data URL".to_string()))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::Other(format!("invalid base64 payload: {}", e)))
}

/// Rasterize the subtree rooted at `root` at the viewport width.
pub fn render_element(root: &Element, viewport: Viewport, theme: &Theme) -> Result<Screenshot> {
    if viewport.width == 0 {
        return Err(Error::CaptureError("viewport width is zero".to_string()));
    }

    let (nodes, height) = layout::layout_element(root, viewport);
    let commands = paint::build_display_list(&nodes, viewport.width, height, theme);
    let png_data = raster::rasterize_to_png(&commands, viewport.width, height)?;

    Ok(Screenshot {
        width: viewport.width,
        height,
        png_data,
    })
}
