//! Field validators.
//!
//! Validators see one submitted value at a time. Blank values are never
//! passed to them: emptiness is the `required` flag's concern.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Checks one submitted value.
pub trait Validator: Send + Sync {
    /// Returns the message to show when `value` is rejected.
    fn validate(&self, value: &str) -> Result<(), String>;
}

/// Accepts addresses of the form `local@domain.tld`.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    pub fn new() -> Self {
        Self::with_message("Enter a valid email address.")
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Bounds a value's length, counted in characters.
///
/// ```rust
/// use bootform::validation::{LengthValidator, Validator};
///
/// let nick = LengthValidator::between(3, 16);
/// assert!(nick.validate("neo").is_ok());
/// assert_eq!(
///     nick.validate("n").unwrap_err(),
///     "Ensure this value has at least 3 characters."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthValidator {
    pub fn min(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn max(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Validator for LengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        match (self.min, self.max) {
            (Some(min), _) if len < min => {
                Err(format!("Ensure this value has at least {min} characters."))
            }
            (_, Some(max)) if len > max => {
                Err(format!("Ensure this value has at most {max} characters."))
            }
            _ => Ok(()),
        }
    }
}
