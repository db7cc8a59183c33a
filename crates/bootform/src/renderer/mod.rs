//! Form and field renderers.
//!
//! [`FormRenderer`] walks a form's fields and delegates each control to
//! the field's [`FieldRenderer`], and each error block to an
//! [`ErrorRenderer`]. [`SimpleFormRenderer`] renders every field with one
//! generic algorithm instead.

mod choice;
mod config;
mod error;
mod form;
mod input;
mod layout;
mod select;
mod simple;
mod textarea;

pub use choice::{ChoiceKind, ChoiceRenderer};
pub use config::RendererConfig;
pub use error::{message_text, DefaultErrorRenderer, ErrorRenderer};
pub use form::FormRenderer;
pub use input::InputRenderer;
pub use layout::Layout;
pub use select::SelectRenderer;
pub use simple::SimpleFormRenderer;
pub use textarea::TextareaRenderer;

use bootform_dom::{Document, Fragment};

use crate::error::Result;
use crate::field::Field;

/// Renders the control for one field: no label, no error block.
pub trait FieldRenderer: Send + Sync {
    /// Builds the control nodes for `field`.
    ///
    /// # Errors
    ///
    /// [`FormError::IncompatibleRenderer`](crate::FormError::IncompatibleRenderer)
    /// when the field's shape does not fit this renderer, and
    /// [`FormError::MissingConfiguration`](crate::FormError::MissingConfiguration)
    /// when the field lacks configuration this renderer needs.
    fn render(&self, doc: &Document, field: &Field) -> Result<Fragment>;

    /// Name used in error messages and logs.
    fn name(&self) -> &'static str;
}
