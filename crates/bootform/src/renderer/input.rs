//! Generic input renderer.

use bootform_dom::serialize::is_tag_name;
use bootform_dom::{Document, Element, Fragment};
use tracing::trace;

use super::FieldRenderer;
use crate::error::Result;
use crate::field::Field;

/// Renders `<tag type name id value class>` straight from the field.
///
/// This is the strategy [`FormRenderer`](super::FormRenderer) falls back to
/// for fields without a renderer. Required fields get a bare `required`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRenderer;

impl FieldRenderer for InputRenderer {
    fn render(&self, doc: &Document, field: &Field) -> Result<Fragment> {
        let mut input = control_element(doc, field);
        if field.required {
            input.set_flag("required");
        }
        Ok(Fragment::from(input))
    }

    fn name(&self) -> &'static str {
        "input renderer"
    }
}

/// Builds the control element with attributes copied from the field.
///
/// A field without a usable tag name renders as `input`.
pub(crate) fn control_element(doc: &Document, field: &Field) -> Element {
    let tag: &str = if is_tag_name(&field.tag) {
        &field.tag
    } else {
        if !field.tag.is_empty() {
            trace!(field = %field.name, tag = %field.tag, "unusable tag name, rendering input");
        }
        "input"
    };
    let mut element = doc.create_element(tag);
    element.set_attribute("type", &field.tag_type);
    element.set_attribute("name", &field.name);
    element.set_attribute("id", &field.id);
    element.set_attribute("value", field.value.to_attribute());
    element.set_attribute("class", &field.class);
    element
}
