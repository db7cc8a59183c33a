//! Label construction and per-field block assembly.

use bootform_dom::{Document, Element, Fragment};
use serde::{Deserialize, Serialize};

use crate::field::Field;

fn default_label_class() -> String {
    "col-sm-2 control-label".to_string()
}

fn default_control_class() -> String {
    "col-sm-10".to_string()
}

/// How [`FormRenderer`](super::FormRenderer) arranges each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    /// Label above the control.
    #[default]
    Vertical,
    /// Label and control side by side in grid columns.
    Horizontal {
        /// Classes of the label.
        #[serde(default = "default_label_class")]
        label_class: String,
        /// Classes of the column wrapping the control and its errors.
        #[serde(default = "default_control_class")]
        control_class: String,
    },
}

impl Layout {
    /// Horizontal layout with a two-column label.
    pub fn horizontal() -> Self {
        Self::Horizontal {
            label_class: default_label_class(),
            control_class: default_control_class(),
        }
    }

    /// Builds the label, prefixed with `required_marker` for required fields.
    pub(crate) fn label(&self, doc: &Document, field: &Field, required_marker: &str) -> Element {
        let mut label = doc.create_element("label");
        label.set_attribute("for", &field.id);
        if let Self::Horizontal { label_class, .. } = self {
            label.set_attribute("class", label_class);
        }

        if field.required {
            let mut marker = doc.create_element("span");
            marker.set_attribute("class", "text-danger");
            marker.append_child(doc.create_text_node(required_marker));
            label.append_child(marker);
        }

        if !field.label.is_empty() {
            label.append_child(doc.create_text_node(&field.label));
        }
        label
    }

    /// Appends label, control and errors to `block` and classes it.
    ///
    /// `form-group` is appended to any class already on the block.
    pub(crate) fn assemble(
        &self,
        doc: &Document,
        mut block: Element,
        label: Element,
        control: Fragment,
        errors: Option<Element>,
    ) -> Element {
        let class = format!("{}form-group", block.attribute("class").unwrap_or_default());
        block.set_attribute("class", class);
        block.append_child(label);

        match self {
            Self::Vertical => {
                block.append_fragment(control);
                if let Some(errors) = errors {
                    block.append_child(errors);
                }
            }
            Self::Horizontal { control_class, .. } => {
                let mut column = doc.create_element("div");
                column.set_attribute("class", control_class);
                column.append_fragment(control);
                if let Some(errors) = errors {
                    column.append_child(errors);
                }
                block.append_child(column);
            }
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_label() {
        let field = Field::new("name", "input", "text").id("name").label("Name");
        let label = Layout::Vertical.label(&Document::new(), &field, "* ");
        assert_eq!(label.to_html(), r#"<label for="name">Name</label>"#);
    }

    #[test]
    fn test_required_marker_precedes_text() {
        let field = Field::new("name", "input", "text").label("Name").required();
        let label = Layout::Vertical.label(&Document::new(), &field, "* ");
        assert_eq!(
            label.to_html(),
            r#"<label for=""><span class="text-danger">* </span>Name</label>"#
        );
    }

    #[test]
    fn test_horizontal_wraps_control_and_errors() {
        let doc = Document::new();
        let field = Field::new("name", "input", "text").label("Name");
        let layout = Layout::horizontal();
        let label = layout.label(&doc, &field, "* ");
        let block = layout.assemble(
            &doc,
            doc.create_element("div"),
            label,
            Fragment::from(doc.create_element("input")),
            Some(doc.create_element_with_text("span", "bad")),
        );
        assert_eq!(
            block.to_html(),
            "<div class=\"form-group\">\
             <label for=\"\" class=\"col-sm-2 control-label\">Name</label>\
             <div class=\"col-sm-10\"><input><span>bad</span></div>\
             </div>"
        );
    }

    #[test]
    fn test_existing_block_class_is_kept() {
        let doc = Document::new();
        let mut block = doc.create_element("div");
        block.set_attribute("class", "has-error ");
        let block = Layout::Vertical.assemble(
            &doc,
            block,
            doc.create_element("label"),
            Fragment::new(),
            None,
        );
        assert_eq!(block.attribute("class"), Some("has-error form-group"));
    }

    #[test]
    fn test_layout_deserializes_with_defaults() {
        let layout: Layout = serde_json::from_str(r#"{"type": "horizontal"}"#).unwrap();
        assert_eq!(layout, Layout::horizontal());

        let layout: Layout = serde_json::from_str(r#"{"type": "vertical"}"#).unwrap();
        assert_eq!(layout, Layout::Vertical);
    }
}
