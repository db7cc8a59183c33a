//! Select renderer.

use bootform_dom::{Document, Fragment};

use super::FieldRenderer;
use crate::error::{FormError, Result};
use crate::field::Field;

/// Renders a `<select>` with one `<option>` per field option.
#[derive(Debug, Clone, Default)]
pub struct SelectRenderer {
    /// Allows several options to be selected.
    pub multiple: bool,
    /// Label of a leading empty option, if any.
    pub blank_label: Option<String>,
}

impl SelectRenderer {
    /// Creates a single-choice select renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a multi-choice select renderer.
    pub fn multiple() -> Self {
        Self {
            multiple: true,
            blank_label: None,
        }
    }

    /// Adds a leading empty option.
    #[must_use]
    pub fn blank(mut self, label: impl Into<String>) -> Self {
        self.blank_label = Some(label.into());
        self
    }
}

impl FieldRenderer for SelectRenderer {
    fn render(&self, doc: &Document, field: &Field) -> Result<Fragment> {
        let options = field
            .options
            .as_ref()
            .ok_or_else(|| FormError::IncompatibleRenderer {
                renderer: self.name(),
                field: field.name.clone(),
                reason: "field has no option set".to_string(),
            })?;

        let mut select = doc.create_element("select");
        select.set_attribute("name", &field.name);
        select.set_attribute("id", &field.id);
        select.set_attribute("class", &field.class);
        if self.multiple {
            select.set_flag("multiple");
        }

        if let Some(blank) = &self.blank_label {
            let mut option = doc.create_element_with_text("option", blank.as_str());
            option.set_attribute("value", "");
            select.append_child(option);
        }

        for (key, label) in options {
            let mut option = doc.create_element("option");
            option.set_attribute("value", key);
            if field.value.contains(key) {
                option.set_flag("selected");
            }
            option.append_text(label);
            select.append_child(option);
        }

        Ok(Fragment::from(select))
    }

    fn name(&self) -> &'static str {
        "select renderer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_marks_selected_option() {
        let field = Field::new("status", "select", "")
            .options([("draft", "Draft"), ("published", "Published")])
            .value("published");
        let html = SelectRenderer::new()
            .blank("---------")
            .render(&Document::new(), &field)
            .unwrap()
            .to_html();
        assert_eq!(
            html,
            "<select name=\"status\" id=\"\" class=\"\">\
             <option value=\"\">---------</option>\
             <option value=\"draft\">Draft</option>\
             <option value=\"published\" selected>Published</option>\
             </select>"
        );
    }

    #[test]
    fn test_multiple_select() {
        let field = Field::new("tags", "select", "")
            .options([("a", "A"), ("b", "B"), ("c", "C")])
            .value(vec!["a", "c"]);
        let html = SelectRenderer::multiple()
            .render(&Document::new(), &field)
            .unwrap()
            .to_html();
        assert!(html.contains(" multiple>"));
        assert_eq!(html.matches(" selected").count(), 2);
    }

    #[test]
    fn test_select_without_options_is_incompatible() {
        let field = Field::new("status", "input", "text");
        let err = SelectRenderer::new()
            .render(&Document::new(), &field)
            .unwrap_err();
        assert!(matches!(err, FormError::IncompatibleRenderer { .. }));
    }
}
