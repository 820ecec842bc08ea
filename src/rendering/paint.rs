//! Paint commands for the laid-out surface
//!
//! `build_display_list` turns layout nodes into an ordered command list:
//! background first, then per-node fills and text. The rasterizer executes
//! the list verbatim, so paint order is z-order.

use crate::rendering::layout::{textarea_line_height, LayoutNode, NodeKind, GLYPH};
use crate::{Rgba, Theme};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba: Rgba,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        scale: usize,
        rgba: Rgba,
    },
}

/// Border plus interior fill for input and text-area boxes
fn boxed_fill(out: &mut Vec<PaintCommand>, node: &LayoutNode, interior: Rgba, border: Rgba) {
    let r = &node.lb.rect;
    let bw = node.lb.box_model.border;
    out.push(PaintCommand::SolidRect {
        x: r.x,
        y: r.y,
        width: r.width,
        height: r.height,
        rgba: border,
    });
    out.push(PaintCommand::SolidRect {
        x: r.x + bw as i32,
        y: r.y + bw as i32,
        width: r.width.saturating_sub(bw * 2),
        height: r.height.saturating_sub(bw * 2),
        rgba: interior,
    });
}

pub fn build_display_list(
    nodes: &[LayoutNode],
    width: u32,
    height: u32,
    theme: &Theme,
) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    out.push(PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width,
        height,
        rgba: theme.background,
    });

    for node in nodes {
        let r = &node.lb.rect;
        match node.kind {
            NodeKind::Heading | NodeKind::Label => {
                out.push(PaintCommand::Text {
                    x: r.x,
                    y: r.y,
                    text: node.text.clone(),
                    scale: node.scale,
                    rgba: theme.text,
                });
            }
            NodeKind::ErrorLine => {
                out.push(PaintCommand::Text {
                    x: r.x,
                    y: r.y,
                    text: node.text.clone(),
                    scale: node.scale,
                    rgba: theme.error_text,
                });
            }
            NodeKind::InputBox => {
                boxed_fill(&mut out, node, theme.input_background, theme.border);
                if !node.text.is_empty() {
                    let pad = node.lb.box_model.padding as i32;
                    out.push(PaintCommand::Text {
                        x: r.x + pad,
                        y: r.y + (r.height.saturating_sub(GLYPH) / 2) as i32,
                        text: node.text.clone(),
                        scale: node.scale,
                        rgba: theme.text,
                    });
                }
            }
            NodeKind::Button | NodeKind::ButtonDisabled => {
                let enabled = node.kind == NodeKind::Button;
                out.push(PaintCommand::SolidRect {
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                    rgba: if enabled {
                        theme.button_face
                    } else {
                        theme.button_face_disabled
                    },
                });
                let label_w = node.text.chars().count() as u32 * GLYPH;
                out.push(PaintCommand::Text {
                    x: r.x + (r.width.saturating_sub(label_w) / 2) as i32,
                    y: r.y + (r.height.saturating_sub(GLYPH) / 2) as i32,
                    text: node.text.clone(),
                    scale: node.scale,
                    rgba: if enabled {
                        theme.button_text
                    } else {
                        theme.button_text_disabled
                    },
                });
            }
            NodeKind::TextAreaBox => {
                boxed_fill(&mut out, node, theme.input_background, theme.border);
                let pad = node.lb.box_model.padding as i32;
                for (i, line) in node.text.lines().enumerate() {
                    out.push(PaintCommand::Text {
                        x: r.x + pad,
                        y: r.y + pad + (i as u32 * textarea_line_height()) as i32,
                        text: line.to_string(),
                        scale: node.scale,
                        rgba: theme.text,
                    });
                }
            }
        }
    }

    out
}
