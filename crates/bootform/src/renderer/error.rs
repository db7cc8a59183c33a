//! Error block rendering.

use bootform_dom::{Document, Element};

use crate::field::{Field, Message};

/// Decides whether a field's messages are shown, and builds the block.
pub trait ErrorRenderer: Send + Sync {
    /// Returns whether an error block should be rendered for `field`.
    fn should_render(&self, field: &Field) -> bool;

    /// Builds the error block for `field`.
    fn render(&self, doc: &Document, field: &Field) -> Element;
}

/// Renders `span.help-block` for every invalid field.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorRenderer;

impl ErrorRenderer for DefaultErrorRenderer {
    fn should_render(&self, field: &Field) -> bool {
        !field.is_valid()
    }

    fn render(&self, doc: &Document, field: &Field) -> Element {
        let text = match &field.custom_error_message {
            Some(message) => message.clone(),
            None => message_text(&field.messages()),
        };
        let mut block = doc.create_element("span");
        block.set_attribute("class", "help-block");
        block.set_text(text);
        block
    }
}

/// Joins messages into block text, each line followed by `\n`.
pub fn message_text(messages: &[Message]) -> String {
    messages
        .iter()
        .flat_map(Message::lines)
        .fold(String::new(), |mut text, line| {
            text.push_str(line);
            text.push('\n');
            text
        })
}
