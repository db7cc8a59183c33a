//! Field model: one form control's identity, value and validity.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::renderer::FieldRenderer;
use crate::validation::Validator;

/// Message reported when a required field has no value.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// A submitted or initial field value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A single value, as sent by text inputs, selects and radios.
    Single(String),
    /// Several values, as sent by checkbox groups and multi-selects.
    Multiple(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl FieldValue {
    /// Iterates over the contained values.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values.as_slice(),
        };
        values.iter().map(String::as_str)
    }

    /// Returns the first value, if any.
    pub fn first(&self) -> Option<&str> {
        self.iter().next()
    }

    /// Returns whether `candidate` is one of the values.
    pub fn contains(&self, candidate: &str) -> bool {
        self.iter().any(|value| value == candidate)
    }

    /// Returns whether no non-blank value is present.
    pub fn is_blank(&self) -> bool {
        self.iter().all(|value| value.trim().is_empty())
    }

    /// Renders the value for a `value` attribute. Lists are comma-joined.
    pub fn to_attribute(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::Multiple(values) => values.join(","),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// A validation message. Groups nest exactly one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A single message.
    Text(String),
    /// Several messages from one constraint.
    Group(Vec<String>),
}

impl Message {
    /// Iterates over the message lines, flattening a group.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let lines = match self {
            Self::Text(text) => std::slice::from_ref(text),
            Self::Group(texts) => texts.as_slice(),
        };
        lines.iter().map(String::as_str)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// One form control.
///
/// Renderers only ever see a `&Field`; validity and messages are computed
/// from the current value on demand.
#[derive(Clone)]
pub struct Field {
    /// Field name, used as the submitted key.
    pub name: String,
    /// Element id. May be empty.
    pub id: String,
    /// Label text.
    pub label: String,
    /// Current value.
    pub value: FieldValue,
    /// Element name of the control (`input`, `select`, ...).
    pub tag: String,
    /// Value of the control's `type` attribute.
    pub tag_type: String,
    /// CSS classes of the control.
    pub class: String,
    /// Whether a non-blank value is required.
    pub required: bool,
    /// Option key/label pairs. `None` for controls that carry no options.
    pub options: Option<Vec<(String, String)>>,
    /// Whether option groups render on one line.
    pub render_inline: bool,
    /// Validators applied to every non-blank value.
    pub validators: Vec<Arc<dyn Validator>>,
    /// Errors added from outside the validators.
    pub errors: Vec<Message>,
    /// Replaces the message list in the error block when set.
    pub custom_error_message: Option<String>,
    /// Control renderer. `None` selects the generic input strategy.
    pub renderer: Option<Arc<dyn FieldRenderer>>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("label", &self.label)
            .field("value", &self.value)
            .field("tag", &self.tag)
            .field("tag_type", &self.tag_type)
            .field("required", &self.required)
            .field("options", &self.options)
            .field("render_inline", &self.render_inline)
            .field("renderer", &self.renderer.as_ref().map(|r| r.name()))
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Creates a field rendered as `<tag type="tag_type">`.
    pub fn new(name: impl Into<String>, tag: impl Into<String>, tag_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: String::new(),
            label: String::new(),
            value: FieldValue::default(),
            tag: tag.into(),
            tag_type: tag_type.into(),
            class: String::new(),
            required: false,
            options: None,
            render_inline: false,
            validators: Vec::new(),
            errors: Vec::new(),
            custom_error_message: None,
            renderer: None,
        }
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the CSS classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the option key/label pairs, replacing any previous set.
    #[must_use]
    pub fn options<K, L>(mut self, options: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        self.set_options(options);
        self
    }

    /// Renders option groups on one line.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.render_inline = true;
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Sets the message shown instead of the validation messages.
    #[must_use]
    pub fn custom_error_message(mut self, message: impl Into<String>) -> Self {
        self.custom_error_message = Some(message.into());
        self
    }

    /// Attaches a control renderer.
    #[must_use]
    pub fn renderer(mut self, renderer: impl FieldRenderer + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: impl Into<FieldValue>) {
        self.value = value.into();
    }

    /// Replaces the option set.
    pub fn set_options<K, L>(&mut self, options: impl IntoIterator<Item = (K, L)>)
    where
        K: Into<String>,
        L: Into<String>,
    {
        self.options = Some(
            options
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        );
    }

    /// Adds an error that is not produced by a validator.
    pub fn add_error(&mut self, message: impl Into<Message>) {
        self.errors.push(message.into());
    }

    /// Removes errors added with [`Field::add_error`].
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Returns the validation messages for the current value, in order:
    /// the required message, each failing validator, then added errors.
    ///
    /// A validator failing on several values of a list yields one
    /// [`Message::Group`].
    pub fn messages(&self) -> Vec<Message> {
        let mut messages = Vec::new();

        if self.value.is_blank() {
            if self.required {
                messages.push(Message::Text(REQUIRED_MESSAGE.to_string()));
            }
        } else {
            for validator in &self.validators {
                let mut failures: Vec<String> = self
                    .value
                    .iter()
                    .filter(|value| !value.trim().is_empty())
                    .filter_map(|value| validator.validate(value).err())
                    .collect();
                match failures.len() {
                    0 => {}
                    1 => messages.extend(failures.pop().map(Message::Text)),
                    _ => messages.push(Message::Group(failures)),
                }
            }
        }

        messages.extend(self.errors.iter().cloned());
        messages
    }

    /// Returns whether the current value passes every check.
    pub fn is_valid(&self) -> bool {
        self.messages().is_empty()
    }
}
