//! Text-like field types.

use crate::field::Field;
use crate::renderer::TextareaRenderer;
use crate::validation::EmailValidator;

/// Creates a text input.
pub fn text_field(name: &str, label: &str) -> Field {
    Field::new(name, "input", "text")
        .id(name)
        .label(label)
        .class("form-control")
}

/// Creates an email input validated as an address.
pub fn email_field(name: &str, label: &str) -> Field {
    Field::new(name, "input", "email")
        .id(name)
        .label(label)
        .class("form-control")
        .validator(EmailValidator::new())
}

/// Creates a password input.
pub fn password_field(name: &str, label: &str) -> Field {
    Field::new(name, "input", "password")
        .id(name)
        .label(label)
        .class("form-control")
}

/// Creates a hidden input.
pub fn hidden_field(name: &str, value: &str) -> Field {
    Field::new(name, "input", "hidden").value(value)
}

/// Creates a textarea.
pub fn textarea_field(name: &str, label: &str, rows: usize) -> Field {
    Field::new(name, "textarea", "")
        .id(name)
        .label(label)
        .class("form-control")
        .renderer(TextareaRenderer::with_rows(rows))
}

/// Creates a submit button whose caption is `value`.
pub fn submit_field(name: &str, value: &str) -> Field {
    Field::new(name, "input", "submit")
        .value(value)
        .class("btn btn-primary")
}
