//! Block layout for the element tree
//!
//! Stacks elements vertically at a fixed glyph size (8x8 cells, headings at
//! scale 2), so the same tree and viewport always produce the same geometry.
//! The returned content height includes the page padding and becomes the
//! raster height; the viewport height is not a clip.

use crate::rendering::tree::{Element, PanelRole};
use crate::Viewport;

/// Size of one glyph cell at scale 1
pub const GLYPH: u32 = 8;
/// Padding around the laid-out root
pub const PAGE_PAD: u32 = 16;
/// Height of an input box, border included
pub const INPUT_HEIGHT: u32 = 24;
/// Height of a button
pub const BUTTON_HEIGHT: u32 = 28;
/// Visible rows of a text area; longer content is clipped
pub const TEXTAREA_ROWS: usize = 8;

const HEADING_MARGIN: u32 = 12;
const LABEL_GAP: u32 = 4;
const ERROR_GAP: u32 = 2;
const GROUP_MARGIN: u32 = 12;
const PANEL_GAP: u32 = 16;
const BUTTON_PAD_X: u32 = 12;
const BOX_PAD: u32 = 6;
const TEXTAREA_LINE_H: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel {
    pub margin: u32,
    pub border: u32,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    pub rect: Rect,
    pub box_model: BoxModel,
}

impl LayoutBox {
    pub fn content_width(&self) -> u32 {
        let total = self.box_model.margin + self.box_model.border + self.box_model.padding;
        self.rect.width.saturating_sub(total)
    }
}

/// What the painter should make of a laid-out box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Heading,
    Label,
    InputBox,
    ErrorLine,
    Button,
    ButtonDisabled,
    TextAreaBox,
}

/// A layout node couples a `LayoutBox` with its text, kind, and glyph scale.
/// Multi-line text is pre-wrapped and joined with `\n`.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub lb: LayoutBox,
    pub text: String,
    pub kind: NodeKind,
    pub scale: usize,
}

fn plain_box(x: i32, y: u32, width: u32, height: u32) -> LayoutBox {
    LayoutBox {
        rect: Rect {
            x,
            y: y as i32,
            width,
            height,
        },
        box_model: BoxModel {
            margin: 0,
            border: 0,
            padding: 0,
        },
    }
}

fn bordered_box(x: i32, y: u32, width: u32, height: u32, padding: u32) -> LayoutBox {
    LayoutBox {
        rect: Rect {
            x,
            y: y as i32,
            width,
            height,
        },
        box_model: BoxModel {
            margin: 0,
            border: 1,
            padding,
        },
    }
}

/// Hard-wrap `text` into lines of at most `chars_per_line` characters.
/// Data URLs contain no whitespace, so word wrapping does not apply here.
fn hard_wrap(text: &str, chars_per_line: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(chars_per_line.max(1))
        .map(|c| c.iter().collect())
        .collect()
}

/// Lay out the tree rooted at `root` for the given viewport.
///
/// Returns the flat node list in paint order and the total content height
/// (page padding included).
pub fn layout_element(root: &Element, viewport: Viewport) -> (Vec<LayoutNode>, u32) {
    let content_w = viewport.width.saturating_sub(PAGE_PAD * 2);
    let mut nodes = Vec::new();
    let y = layout_node(root, PAGE_PAD as i32, content_w, PAGE_PAD, &mut nodes);
    (nodes, y + PAGE_PAD)
}

fn layout_node(
    element: &Element,
    x: i32,
    w: u32,
    mut y: u32,
    nodes: &mut Vec<LayoutNode>,
) -> u32 {
    match element {
        Element::Panel {
            role: PanelRole::Group,
            children,
        } => {
            let mut iter = children.iter().peekable();
            while let Some(child) = iter.next() {
                y = layout_node(child, x, w, y, nodes);
                if iter.peek().is_some() {
                    y += match child {
                        Element::Label { .. } => LABEL_GAP,
                        Element::Input { .. } => ERROR_GAP,
                        _ => 0,
                    };
                }
            }
            y + GROUP_MARGIN
        }
        Element::Panel { role, children } => {
            if *role == PanelRole::Output {
                y += PANEL_GAP;
            }
            for child in children {
                y = layout_node(child, x, w, y, nodes);
            }
            y
        }
        Element::Heading { text, scale } => {
            let h = GLYPH * *scale as u32;
            nodes.push(LayoutNode {
                lb: plain_box(x, y, w, h),
                text: text.clone(),
                kind: NodeKind::Heading,
                scale: *scale,
            });
            y + h + HEADING_MARGIN
        }
        Element::Label { text } => {
            nodes.push(LayoutNode {
                lb: plain_box(x, y, w, GLYPH),
                text: text.clone(),
                kind: NodeKind::Label,
                scale: 1,
            });
            y + GLYPH
        }
        Element::Input { value, .. } => {
            nodes.push(LayoutNode {
                lb: bordered_box(x, y, w, INPUT_HEIGHT, BOX_PAD),
                text: value.clone(),
                kind: NodeKind::InputBox,
                scale: 1,
            });
            y + INPUT_HEIGHT
        }
        Element::ErrorText { text } => {
            nodes.push(LayoutNode {
                lb: plain_box(x, y, w, GLYPH),
                text: text.clone(),
                kind: NodeKind::ErrorLine,
                scale: 1,
            });
            y + GLYPH
        }
        Element::Button { label, enabled } => {
            let label_w = label.chars().count() as u32 * GLYPH;
            let btn_w = (label_w + BUTTON_PAD_X * 2).min(w.max(1));
            nodes.push(LayoutNode {
                lb: LayoutBox {
                    rect: Rect {
                        x,
                        y: y as i32,
                        width: btn_w,
                        height: BUTTON_HEIGHT,
                    },
                    box_model: BoxModel {
                        margin: 0,
                        border: 0,
                        padding: BUTTON_PAD_X,
                    },
                },
                text: label.clone(),
                kind: if *enabled {
                    NodeKind::Button
                } else {
                    NodeKind::ButtonDisabled
                },
                scale: 1,
            });
            y + BUTTON_HEIGHT
        }
        Element::TextArea { text } => {
            let inner_w = w.saturating_sub(BOX_PAD * 2);
            let chars_per_line = if inner_w >= GLYPH {
                (inner_w / GLYPH) as usize
            } else {
                1
            };
            let mut lines = hard_wrap(text, chars_per_line);
            lines.truncate(TEXTAREA_ROWS);
            let rows = lines.len() as u32;
            let h = BOX_PAD * 2 + rows * TEXTAREA_LINE_H - 2;
            nodes.push(LayoutNode {
                lb: bordered_box(x, y, w, h, BOX_PAD),
                text: lines.join("\n"),
                kind: NodeKind::TextAreaBox,
                scale: 1,
            });
            y + h + LABEL_GAP
        }
    }
}

/// Line advance inside a text area, shared with the painter
pub const fn textarea_line_height() -> u32 {
    TEXTAREA_LINE_H
}
