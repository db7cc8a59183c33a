//! Option-bearing field types.

use crate::field::Field;
use crate::renderer::{ChoiceRenderer, SelectRenderer};

/// Creates a radio group.
pub fn radio_field(name: &str, label: &str, options: Vec<(&str, &str)>) -> Field {
    Field::new(name, "input", "radio")
        .label(label)
        .options(options)
        .renderer(ChoiceRenderer::radio())
}

/// Creates a checkbox group.
pub fn checkbox_field(name: &str, label: &str, options: Vec<(&str, &str)>) -> Field {
    Field::new(name, "input", "checkbox")
        .label(label)
        .options(options)
        .renderer(ChoiceRenderer::checkbox())
}

/// Creates a dropdown.
pub fn select_field(name: &str, label: &str, options: Vec<(&str, &str)>) -> Field {
    Field::new(name, "select", "")
        .id(name)
        .label(label)
        .class("form-control")
        .options(options)
        .renderer(SelectRenderer::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radio_field() {
        let field = radio_field("choose", "Choose", vec![("hello", "Choose")]);
        assert_eq!(field.options.as_ref().map(Vec::len), Some(1));
        assert_eq!(field.id, "");
        assert_eq!(field.renderer.as_ref().map(|r| r.name()), Some("radio renderer"));
    }

    #[test]
    fn test_checkbox_field() {
        let field = checkbox_field("tags", "Tags", vec![("a", "A"), ("b", "B")]);
        assert_eq!(field.tag_type, "checkbox");
        assert_eq!(field.renderer.as_ref().map(|r| r.name()), Some("checkbox renderer"));
    }

    #[test]
    fn test_select_field() {
        let field = select_field("status", "Status", vec![("draft", "Draft")]);
        assert_eq!(field.tag, "select");
        assert_eq!(
            field.options,
            Some(vec![("draft".to_string(), "Draft".to_string())])
        );
    }
}
