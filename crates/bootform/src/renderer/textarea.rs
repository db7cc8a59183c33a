//! Textarea renderer.

use bootform_dom::{Document, Fragment};

use super::FieldRenderer;
use crate::error::Result;
use crate::field::Field;

/// Renders `<textarea name id class>value</textarea>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaRenderer {
    /// Visible rows. Omitted from the markup when `None`.
    pub rows: Option<usize>,
}

impl TextareaRenderer {
    /// Creates a textarea renderer with the browser's default height.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a textarea renderer with the given number of rows.
    pub fn with_rows(rows: usize) -> Self {
        Self { rows: Some(rows) }
    }
}

impl FieldRenderer for TextareaRenderer {
    fn render(&self, doc: &Document, field: &Field) -> Result<Fragment> {
        let mut textarea = doc.create_element("textarea");
        textarea.set_attribute("name", &field.name);
        textarea.set_attribute("id", &field.id);
        textarea.set_attribute("class", &field.class);
        if let Some(rows) = self.rows {
            textarea.set_attribute("rows", rows.to_string());
        }
        if field.required {
            textarea.set_flag("required");
        }
        textarea.set_text(field.value.to_attribute());
        Ok(Fragment::from(textarea))
    }

    fn name(&self) -> &'static str {
        "textarea renderer"
    }
}
