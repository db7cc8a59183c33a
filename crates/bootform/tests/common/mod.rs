#![allow(dead_code)]

use bootform::fields::radio_field;
use bootform::{Field, Form, FormError, FormRenderer};

pub fn render(form: &Form) -> String {
    form.render(true)
        .unwrap_or_else(|e| panic!("Failed to render form: {e}"))
}

pub fn render_err(form: &Form) -> FormError {
    FormRenderer::new()
        .render(form, true)
        .expect_err("Expected render error")
}

pub fn radio(options: Vec<(&str, &str)>) -> Field {
    radio_field("choose", "Choose", options)
}

/// A form with one field of every kind, with invalid values.
pub fn mixed_form() -> Form {
    use bootform::fields::{checkbox_field, email_field, select_field, text_field};

    Form::new("mixed")
        .field(text_field("name", "Name").required())
        .field(email_field("email", "Email").value("not-an-email"))
        .field(select_field("plan", "Plan", vec![("free", "Free"), ("pro", "Pro")]).value("pro"))
        .field(checkbox_field("tags", "Tags", vec![("a", "A"), ("b", "B")]).value(vec!["b"]))
}
