//! Radio and checkbox group renderer.

use bootform_dom::{Document, Element, Fragment};

use super::FieldRenderer;
use crate::error::{FormError, Result};
use crate::field::Field;

/// The input type of a choice group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    /// One value out of many.
    Radio,
    /// Any number of values.
    Checkbox,
}

impl ChoiceKind {
    fn input_type(self) -> &'static str {
        match self {
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
        }
    }

    fn inline_class(self) -> &'static str {
        match self {
            Self::Radio => "radio-inline",
            Self::Checkbox => "checkbox-inline",
        }
    }
}

/// Renders one input per field option.
///
/// Stacked groups wrap each option as `div.radio > label > input`. Inline
/// groups emit bare `label.radio-inline > input` siblings. The checkbox
/// kind uses `checkbox` in place of `radio` throughout.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceRenderer {
    kind: ChoiceKind,
}

impl ChoiceRenderer {
    /// Creates a radio group renderer.
    pub const fn radio() -> Self {
        Self {
            kind: ChoiceKind::Radio,
        }
    }

    /// Creates a checkbox group renderer.
    pub const fn checkbox() -> Self {
        Self {
            kind: ChoiceKind::Checkbox,
        }
    }

    /// Returns the group kind.
    pub fn kind(&self) -> ChoiceKind {
        self.kind
    }

    fn is_checked(&self, field: &Field, key: &str) -> bool {
        match self.kind {
            ChoiceKind::Radio => field.value.first() == Some(key),
            ChoiceKind::Checkbox => field.value.contains(key),
        }
    }

    fn option(&self, doc: &Document, field: &Field, key: &str, text: &str) -> Element {
        let mut input = doc.create_element("input");
        input.set_attribute("type", self.kind.input_type());
        input.set_attribute("name", &field.name);
        input.set_attribute("value", key);
        if self.is_checked(field, key) {
            input.set_flag("checked");
        }

        let mut label = doc.create_element("label");
        label.set_attribute("for", &field.id);
        if field.render_inline {
            label.set_attribute("class", self.kind.inline_class());
        }
        label.append_child(input);
        label.append_child(doc.create_text_node(text));

        if field.render_inline {
            return label;
        }

        let mut wrapper = doc.create_element("div");
        wrapper.set_attribute("class", self.kind.input_type());
        wrapper.append_child(label);
        wrapper
    }
}

impl FieldRenderer for ChoiceRenderer {
    fn render(&self, doc: &Document, field: &Field) -> Result<Fragment> {
        let options = field
            .options
            .as_ref()
            .ok_or_else(|| FormError::IncompatibleRenderer {
                renderer: self.name(),
                field: field.name.clone(),
                reason: "field has no option set".to_string(),
            })?;

        if field.render_inline && options.is_empty() {
            return Err(FormError::MissingConfiguration {
                renderer: self.name(),
                field: field.name.clone(),
                reason: "inline layout needs at least one option".to_string(),
            });
        }

        let mut fragment = doc.create_fragment();
        for (key, text) in options {
            fragment.push(self.option(doc, field, key, text));
        }
        Ok(fragment)
    }

    fn name(&self) -> &'static str {
        match self.kind {
            ChoiceKind::Radio => "radio renderer",
            ChoiceKind::Checkbox => "checkbox renderer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(renderer: ChoiceRenderer, field: &Field) -> Result<String> {
        renderer
            .render(&Document::new(), field)
            .map(|fragment| fragment.to_html())
    }

    #[test]
    fn test_stacked_radio() {
        let field = Field::new("choose", "input", "radio").options([("hello", "Choose")]);
        assert_eq!(
            render(ChoiceRenderer::radio(), &field).unwrap(),
            r#"<div class="radio"><label for=""><input type="radio" name="choose" value="hello">Choose</label></div>"#
        );
    }

    #[test]
    fn test_inline_radio_checks_current_value() {
        let field = Field::new("choose", "input", "radio")
            .options([("1", "hello"), ("2", "hello"), ("3", "hello")])
            .inline()
            .value("3");
        let html = render(ChoiceRenderer::radio(), &field).unwrap();
        assert_eq!(html.matches(r#"<label for="" class="radio-inline">"#).count(), 3);
        assert_eq!(html.matches("checked").count(), 1);
        assert!(html.contains(r#"value="3" checked>"#));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_checkbox_checks_every_contained_key() {
        let field = Field::new("colours", "input", "checkbox")
            .options([("red", "Red"), ("green", "Green"), ("blue", "Blue")])
            .value(vec!["red", "blue"]);
        let html = render(ChoiceRenderer::checkbox(), &field).unwrap();
        assert_eq!(html.matches(r#"<div class="checkbox">"#).count(), 3);
        assert!(html.contains(r#"value="red" checked>"#));
        assert!(html.contains(r#"value="green">"#));
        assert!(html.contains(r#"value="blue" checked>"#));
    }

    #[test]
    fn test_radio_with_list_value_uses_first_entry() {
        let field = Field::new("choose", "input", "radio")
            .options([("a", "A"), ("b", "B")])
            .value(vec!["b", "a"]);
        let html = render(ChoiceRenderer::radio(), &field).unwrap();
        assert!(html.contains(r#"value="b" checked>"#));
        assert!(html.contains(r#"value="a">"#));
    }

    #[test]
    fn test_field_without_options_is_incompatible() {
        let field = Field::new("bang", "input", "text");
        let err = render(ChoiceRenderer::radio(), &field).unwrap_err();
        assert!(matches!(
            err,
            FormError::IncompatibleRenderer { ref field, .. } if field == "bang"
        ));
    }

    #[test]
    fn test_inline_without_options_is_missing_configuration() {
        let field = Field::new("choose", "input", "checkbox")
            .options(Vec::<(String, String)>::new())
            .inline();
        let err = render(ChoiceRenderer::checkbox(), &field).unwrap_err();
        assert!(matches!(err, FormError::MissingConfiguration { .. }));
    }

    #[test]
    fn test_stacked_without_options_renders_nothing() {
        let field = Field::new("choose", "input", "radio").options(Vec::<(String, String)>::new());
        assert_eq!(render(ChoiceRenderer::radio(), &field).unwrap(), "");
    }
}
