//! Single-algorithm form renderer.

use bootform_dom::{Document, Element};
use tracing::debug;

use super::input::control_element;
use super::message_text;
use crate::field::Field;
use crate::form::{Form, METHOD_POST};

/// Renders every field as label + generic control + inline error text.
///
/// Field renderers are ignored: each control is built straight from the
/// field's tag and attributes. Option groups therefore render as a single
/// input, and options are never shown.
#[derive(Debug, Clone)]
pub struct SimpleFormRenderer {
    name: String,
}

impl SimpleFormRenderer {
    /// Creates a renderer whose root element carries `name`.
    ///
    /// An empty `name` defers to the rendered form's own name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name given to rendered forms.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders `form` as a `<form>` element.
    ///
    /// `id`, `method`, `class`, `action` and `enctype` are always present:
    /// `id` falls back to the form's name, then to the renderer's name,
    /// `method` to `post`, and the rest to empty values.
    pub fn render(&self, form: &Form, display_errors: bool) -> String {
        debug!(
            form = %self.name,
            fields = form.fields().len(),
            display_errors,
            "rendering simple form"
        );

        let mut doc = Document::new();
        let mut root = doc.create_element("form");
        root.set_attribute("name", self.root_name(form));
        set_form_attributes(&mut root, form);

        for field in form.fields() {
            root.append_child(field_block(&doc, field, display_errors));
        }

        doc.append_child(root);
        doc.save_html()
    }

    fn root_name<'a>(&'a self, form: &'a Form) -> &'a str {
        if self.name.is_empty() {
            form.name().unwrap_or_default()
        } else {
            &self.name
        }
    }
}

fn set_form_attributes(root: &mut Element, form: &Form) {
    let method = form.method().unwrap_or(METHOD_POST).to_string();
    let id = fallback(form.id().or_else(|| form.name()), root, "name");
    let action = fallback(form.action(), root, "action");
    let enctype = fallback(form.enctype(), root, "enctype");
    let class = form.class().unwrap_or_default().to_string();

    root.set_attribute("id", id);
    root.set_attribute("method", method);
    root.set_attribute("class", class);
    root.set_attribute("action", action);
    root.set_attribute("enctype", enctype);
}

/// Declared value, else whatever the root already carries for `key`.
fn fallback(declared: Option<&str>, root: &Element, key: &str) -> String {
    declared
        .or_else(|| root.attribute(key))
        .unwrap_or_default()
        .to_string()
}

fn field_block(doc: &Document, field: &Field, display_errors: bool) -> Element {
    let mut group = doc.create_element("div");
    group.set_attribute("class", "form-group");

    let mut label = doc.create_element("label");
    label.set_attribute("for", &field.id);
    label.set_text(field.label.as_str());

    group.append_child(label);
    group.append_child(control_element(doc, field));

    if display_errors && !field.is_valid() {
        group.set_attribute("class", "form-group has-error");
        let mut help = doc.create_element("span");
        help.set_attribute("class", "help-block");
        help.set_text(message_text(&field.messages()));
        group.append_child(help);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Message;

    #[test]
    fn test_form_attributes_always_present() {
        let html = SimpleFormRenderer::new("contact").render(&Form::new("contact"), true);
        assert_eq!(
            html,
            r#"<form name="contact" id="contact" method="post" class="" action="" enctype=""></form>"#
        );
    }

    #[test]
    fn test_id_falls_back_to_form_name() {
        let html = SimpleFormRenderer::new("outer").render(&Form::new("login"), true);
        assert!(html.starts_with(r#"<form name="outer" id="login" method="post""#));
    }

    #[test]
    fn test_id_falls_back_to_renderer_name_for_unnamed_form() {
        let html = SimpleFormRenderer::new("outer").render(&Form::new(""), true);
        assert!(html.starts_with(r#"<form name="outer" id="outer" method="post""#));
    }

    #[test]
    fn test_unnamed_renderer_uses_form_name() {
        let html = SimpleFormRenderer::new("").render(&Form::new("login"), true);
        assert!(html.starts_with(r#"<form name="login" id="login" method="post""#));
    }

    #[test]
    fn test_declared_attributes_are_used() {
        let mut form = Form::new("upload");
        form.set_id("upload-form");
        form.set_action("/upload");
        form.set_enctype(crate::form::ENC_TYPE_MULTIPART_FORM_DATA);
        form.set_class("form-inline");
        let html = SimpleFormRenderer::new("upload").render(&form, true);
        assert!(html.starts_with(
            r#"<form name="upload" id="upload-form" method="post" class="form-inline" action="/upload" enctype="multipart/form-data">"#
        ));
    }

    #[test]
    fn test_field_markup() {
        let form = Form::new("f").field(
            Field::new("email", "input", "email")
                .id("email")
                .label("Email")
                .class("form-control")
                .value("a@b.co"),
        );
        let html = SimpleFormRenderer::new("f").render(&form, true);
        assert!(html.contains(
            r#"<div class="form-group"><label for="email">Email</label><input type="email" name="email" id="email" value="a@b.co" class="form-control"></div>"#
        ));
    }

    #[test]
    fn test_error_text_flattens_groups() {
        let mut field = Field::new("code", "input", "text").label("Code").value("x");
        field.add_error("Too short.");
        field.add_error(Message::Group(vec!["No digits.".to_string(), "No symbols.".to_string()]));
        let form = Form::new("f").field(field);

        let html = SimpleFormRenderer::new("f").render(&form, true);
        assert!(html.contains(r#"<div class="form-group has-error">"#));
        assert!(html.contains(
            "<span class=\"help-block\">Too short.\nNo digits.\nNo symbols.\n</span>"
        ));

        let hidden = SimpleFormRenderer::new("f").render(&form, false);
        assert!(!hidden.contains("help-block"));
    }

    #[test]
    fn test_renders_are_independent() {
        let renderer = SimpleFormRenderer::new("f");
        let form = Form::new("f").field(Field::new("a", "input", "text"));
        let first = renderer.render(&form, true);
        let second = renderer.render(&form, true);
        assert_eq!(first, second);
        assert_eq!(second.matches("<form").count(), 1);
    }
}
