//! Error types for form rendering.

use thiserror::Error;

/// Form-specific errors.
///
/// The render-time variants report a broken form definition, not invalid
/// user input. Invalid input is field state, see [`ValidationErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    /// A field renderer was attached to a field whose shape it cannot render.
    #[error("{renderer} cannot render field `{field}`: {reason}")]
    IncompatibleRenderer {
        renderer: &'static str,
        field: String,
        reason: String,
    },

    /// A field renderer is missing configuration it requires.
    #[error("{renderer} is missing configuration for field `{field}`: {reason}")]
    MissingConfiguration {
        renderer: &'static str,
        field: String,
        reason: String,
    },

    /// Renderer configuration could not be parsed.
    #[error("invalid renderer configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Submitted field data could not be parsed.
    #[error("invalid submitted data: {0}")]
    Data(#[source] serde_json::Error),
}

impl FormError {
    /// Returns whether this error reports a misconfigured field renderer.
    pub fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            Self::IncompatibleRenderer { .. } | Self::MissingConfiguration { .. }
        )
    }

    /// Returns the name of the field that caused the error, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::IncompatibleRenderer { field, .. } | Self::MissingConfiguration { field, .. } => {
                Some(field.as_str())
            }
            Self::Config(_) | Self::Data(_) => None,
        }
    }
}

/// Messages of the invalid fields of a form, in field order.
///
/// Built by [`Form::validation_errors`](crate::Form::validation_errors).
/// Message groups are flattened, so each entry is one line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Records `messages` for `field`. Fields without messages are skipped.
    pub(crate) fn push(&mut self, field: &str, messages: Vec<String>) {
        if !messages.is_empty() {
            self.fields.push((field.to_string(), messages));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of invalid fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the messages of the first invalid field named `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in self.iter() {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
