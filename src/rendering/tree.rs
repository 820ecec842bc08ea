//! Element tree for the rendered surface
//!
//! `build_surface` turns a snapshot of session state into the tree the rest
//! of the pipeline consumes: a page panel holding the heading, the form
//! panel (field groups plus the submit button), and, once a capture exists,
//! the result panel. The form panel is the capture root; heading and result
//! panel never appear in captured images.

use crate::form::{Field, FormValues, ValidationErrors};
use crate::FormConfig;

/// Role of a panel within the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRole {
    /// The whole page
    Page,
    /// The capture root: field groups and the submit button
    Form,
    /// One labeled field with its value and optional error line
    Group,
    /// The result panel shown once a capture exists
    Output,
}

/// A node in the rendered surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Panel {
        role: PanelRole,
        children: Vec<Element>,
    },
    Heading {
        text: String,
        scale: usize,
    },
    Label {
        text: String,
    },
    /// A text input; `value` is the displayed text, so password fields
    /// arrive with masking already applied
    Input {
        value: String,
    },
    ErrorText {
        text: String,
    },
    Button {
        label: String,
        enabled: bool,
    },
    /// Read-only multi-line text, used for the captured data URL
    TextArea {
        text: String,
    },
}

impl Element {
    /// Depth-first search for the first panel with the given role
    pub fn find_panel(&self, role: PanelRole) -> Option<&Element> {
        match self {
            Element::Panel {
                role: r, children, ..
            } => {
                if *r == role {
                    return Some(self);
                }
                children.iter().find_map(|c| c.find_panel(role))
            }
            _ => None,
        }
    }

    /// Visible text of this subtree, one line per leaf, empty lines skipped
    pub fn text_content(&self) -> String {
        let mut lines = Vec::new();
        self.collect_text(&mut lines);
        lines.join("\n")
    }

    fn collect_text(&self, lines: &mut Vec<String>) {
        match self {
            Element::Panel { children, .. } => {
                for child in children {
                    child.collect_text(lines);
                }
            }
            Element::Heading { text, .. }
            | Element::Label { text }
            | Element::ErrorText { text }
            | Element::TextArea { text } => {
                if !text.is_empty() {
                    lines.push(text.clone());
                }
            }
            Element::Input { value, .. } => {
                if !value.is_empty() {
                    lines.push(value.clone());
                }
            }
            Element::Button { label, .. } => {
                if !label.is_empty() {
                    lines.push(label.clone());
                }
            }
        }
    }
}

/// A surface tree plus its attachment state.
///
/// A freshly built tree is attached; `detach` simulates the tree going away
/// between render and capture, which makes `capture_form` fail.
#[derive(Debug, Clone)]
pub struct ElementTree {
    root: Element,
    attached: bool,
}

impl ElementTree {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            attached: true,
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The capture root: the form panel, excluding heading and result panel
    pub fn form_root(&self) -> Option<&Element> {
        self.root.find_panel(PanelRole::Form)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Mark the tree as no longer part of a live surface
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Borrowed view of everything the surface reflects
pub struct SurfaceState<'a> {
    pub values: &'a FormValues,
    pub errors: &'a ValidationErrors,
    pub is_submitting: bool,
    pub captured: Option<&'a str>,
    pub config: &'a FormConfig,
}

/// Build the surface for the given session state.
///
/// Field groups are emitted in form order; an error line appears under a
/// field iff the errors map has an entry for it. The submit button is
/// disabled while a submission is in flight, and the result panel is present
/// iff a captured image exists.
pub fn build_surface(state: &SurfaceState) -> ElementTree {
    let config = state.config;
    let mut children = vec![Element::Heading {
        text: config.heading.clone(),
        scale: 2,
    }];

    let mut form_children = Vec::new();
    for field in Field::ALL {
        let raw = state.values.get(field);
        let value = if field.is_masked() {
            config.mask_char.to_string().repeat(raw.chars().count())
        } else {
            raw.to_string()
        };

        let mut group = vec![
            Element::Label {
                text: field.label().to_string(),
            },
            Element::Input { value },
        ];
        if let Some(message) = state.errors.get(&field) {
            group.push(Element::ErrorText {
                text: message.clone(),
            });
        }
        form_children.push(Element::Panel {
            role: PanelRole::Group,
            children: group,
        });
    }
    form_children.push(Element::Button {
        label: config.submit_label.clone(),
        enabled: !state.is_submitting,
    });

    children.push(Element::Panel {
        role: PanelRole::Form,
        children: form_children,
    });

    if let Some(data_url) = state.captured {
        children.push(Element::Panel {
            role: PanelRole::Output,
            children: vec![
                Element::Heading {
                    text: config.output_heading.clone(),
                    scale: 1,
                },
                Element::TextArea {
                    text: data_url.to_string(),
                },
                Element::Button {
                    label: config.copy_label.clone(),
                    enabled: true,
                },
            ],
        });
    }

    ElementTree::new(Element::Panel {
        role: PanelRole::Page,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate;

    fn state_for<'a>(
        values: &'a FormValues,
        errors: &'a ValidationErrors,
        config: &'a FormConfig,
    ) -> SurfaceState<'a> {
        SurfaceState {
            values,
            errors,
            is_submitting: false,
            captured: None,
            config,
        }
    }

    fn valid_values() -> FormValues {
        FormValues {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
        }
    }

    fn collect_inputs(element: &Element, out: &mut Vec<String>) {
        match element {
            Element::Panel { children, .. } => {
                for child in children {
                    collect_inputs(child, out);
                }
            }
            Element::Input { value } => out.push(value.clone()),
            _ => {}
        }
    }

    #[test]
    fn surface_has_one_group_per_field() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();
        let tree = build_surface(&state_for(&values, &errors, &config));

        let form = tree.form_root().expect("form panel");
        match form {
            Element::Panel { children, .. } => {
                let groups = children
                    .iter()
                    .filter(|c| matches!(c, Element::Panel { role: PanelRole::Group, .. }))
                    .count();
                assert_eq!(groups, 4);
                assert!(matches!(children.last(), Some(Element::Button { .. })));
            }
            _ => panic!("form root is not a panel"),
        }
    }

    #[test]
    fn password_values_are_masked_in_the_tree() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();
        let tree = build_surface(&state_for(&values, &errors, &config));

        let text = tree.root().text_content();
        assert!(text.contains("***"));
        assert!(!text.contains("abc"));
        assert!(text.contains("Al"));
    }

    #[test]
    fn input_values_hold_the_displayed_text() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();
        let tree = build_surface(&state_for(&values, &errors, &config));

        let mut inputs = Vec::new();
        collect_inputs(tree.form_root().expect("form panel"), &mut inputs);
        assert_eq!(inputs, vec!["Al", "a@b.com", "***", "***"]);
    }

    #[test]
    fn error_lines_appear_only_for_failing_fields() {
        let mut values = valid_values();
        values.name = String::new();
        let errors = validate(&values);
        let config = FormConfig::default();
        let tree = build_surface(&state_for(&values, &errors, &config));

        let text = tree.root().text_content();
        assert_eq!(text.matches("Required").count(), 1);
        assert!(!text.contains("Passwords must match"));
    }

    #[test]
    fn submit_button_is_disabled_while_submitting() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();
        let mut state = state_for(&values, &errors, &config);
        state.is_submitting = true;
        let tree = build_surface(&state);

        let form = tree.form_root().expect("form panel");
        let button = match form {
            Element::Panel { children, .. } => children.last().unwrap(),
            _ => panic!("form root is not a panel"),
        };
        assert_eq!(
            button,
            &Element::Button {
                label: config.submit_label.clone(),
                enabled: false,
            }
        );
    }

    #[test]
    fn output_panel_is_present_iff_captured() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();

        let without = build_surface(&state_for(&values, &errors, &config));
        assert!(without.root().find_panel(PanelRole::Output).is_none());

        let mut state = state_for(&values, &errors, &config);
        state.captured = Some("data:image/png;base64,AAAA");
        let with = build_surface(&state);
        let output = with.root().find_panel(PanelRole::Output).expect("output panel");
        assert!(output.text_content().contains("data:image/png;base64,AAAA"));
    }

    #[test]
    fn form_root_excludes_heading_and_output() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();
        let mut state = state_for(&values, &errors, &config);
        state.captured = Some("data:image/png;base64,AAAA");
        let tree = build_surface(&state);

        let form_text = tree.form_root().expect("form panel").text_content();
        assert!(!form_text.contains(&config.heading));
        assert!(!form_text.contains("data:image/png"));
        assert!(form_text.contains(&config.submit_label));
    }

    #[test]
    fn detach_marks_the_tree() {
        let values = valid_values();
        let errors = validate(&values);
        let config = FormConfig::default();
        let mut tree = build_surface(&state_for(&values, &errors, &config));
        assert!(tree.is_attached());
        tree.detach();
        assert!(!tree.is_attached());
    }
}
