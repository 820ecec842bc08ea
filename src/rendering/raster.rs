//! Software rasterizer: paint commands to RGBA pixels to PNG bytes
//!
//! Fills are clamped scanline writes into a tightly packed RGBA8 buffer;
//! text comes from the 8x8 basic glyph set, scaled by integer factors.
//! Characters without a glyph advance the pen but draw nothing.

use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::error::{Error, Result};
use crate::rendering::paint::PaintCommand;
use crate::rendering::layout::GLYPH;
use crate::Rgba;

/// Execute paint commands into a `width * height` RGBA8 buffer.
pub fn rasterize(commands: &[PaintCommand], width: u32, height: u32) -> Vec<u8> {
    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    for command in commands {
        match command {
            PaintCommand::SolidRect {
                x,
                y,
                width: w,
                height: h,
                rgba,
            } => {
                fill_rect(&mut pixels, width, height, *x, *y, *w, *h, *rgba);
            }
            PaintCommand::Text {
                x,
                y,
                text,
                scale,
                rgba,
            } => {
                draw_text(&mut pixels, width, height, *x, *y, text, *scale, *rgba);
            }
        }
    }
    pixels
}

/// Opaque rectangle fill, clamped to the canvas.
fn fill_rect(pixels: &mut [u8], width: u32, height: u32, x: i32, y: i32, w: u32, h: u32, rgba: Rgba) {
    let x0 = x.clamp(0, width as i32) as u32;
    let y0 = y.clamp(0, height as i32) as u32;
    let x1 = x.saturating_add(w as i32).clamp(0, width as i32) as u32;
    let y1 = y.saturating_add(h as i32).clamp(0, height as i32) as u32;

    for yy in y0..y1 {
        for xx in x0..x1 {
            let idx = (yy as usize * width as usize + xx as usize) * 4;
            pixels[idx] = rgba.0;
            pixels[idx + 1] = rgba.1;
            pixels[idx + 2] = rgba.2;
            pixels[idx + 3] = rgba.3;
        }
    }
}

/// Draw a single line of text with its top-left corner at (x, y).
fn draw_text(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    text: &str,
    scale: usize,
    rgba: Rgba,
) {
    let scale = scale.max(1);
    let advance = (GLYPH as usize * scale) as i32;
    let mut pen_x = x;

    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..8 {
                    if bits & (1 << col) != 0 {
                        fill_rect(
                            pixels,
                            width,
                            height,
                            pen_x + (col * scale) as i32,
                            y + (row * scale) as i32,
                            scale as u32,
                            scale as u32,
                            rgba,
                        );
                    }
                }
            }
        }
        pen_x += advance;
    }
}

/// Encode an RGBA8 buffer as PNG bytes.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::CaptureError(format!("PNG header: {}", e)))?;
        writer
            .write_image_data(pixels)
            .map_err(|e| Error::CaptureError(format!("PNG encode: {}", e)))?;
    }
    Ok(png_data)
}

/// Rasterize and PNG-encode in one step.
pub fn rasterize_to_png(commands: &[PaintCommand], width: u32, height: u32) -> Result<Vec<u8>> {
    let pixels = rasterize(commands, width, height);
    encode_png(&pixels, width, height)
}
