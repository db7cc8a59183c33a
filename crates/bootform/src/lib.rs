//! # bootform
//!
//! Server-side rendering of HTML forms with Bootstrap 3 markup.
//!
//! This crate provides:
//! - A field model with value-based validation
//! - A restartable, ordered field collection
//! - Pluggable field renderers (inputs, textareas, selects, radio and
//!   checkbox groups) and error renderers
//! - A delegating [`FormRenderer`] with vertical and horizontal layouts,
//!   and a single-algorithm [`SimpleFormRenderer`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bootform::fields::{radio_field, text_field};
//! use bootform::Form;
//!
//! let form = Form::new("signup")
//!     .field(text_field("username", "Username").required().value("neo"))
//!     .field(radio_field("plan", "Plan", vec![("free", "Free"), ("pro", "Pro")]).value("pro"));
//!
//! let html = form.render(true).unwrap();
//! assert!(html.starts_with(r#"<form name="signup" method="post" id="signup">"#));
//! assert!(html.contains(r#"value="pro" checked"#));
//! ```
//!
//! ## Errors
//!
//! Invalid input is field state: rendering an invalid field with
//! `display_errors` set marks its block with `has-error` and appends a
//! `help-block`. A field renderer that cannot render its field is a
//! programming error and aborts the render:
//!
//! ```rust
//! use bootform::fields::text_field;
//! use bootform::renderer::ChoiceRenderer;
//! use bootform::{Form, FormError};
//!
//! let form = Form::new("broken")
//!     .field(text_field("bang", "Bang").renderer(ChoiceRenderer::radio()));
//!
//! let err = form.render(true).unwrap_err();
//! assert!(matches!(err, FormError::IncompatibleRenderer { .. }));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use bootform::renderer::{FormRenderer, RendererConfig};
//! use bootform::Form;
//!
//! let config = RendererConfig::from_json(r#"{"layout": {"type": "horizontal"}}"#).unwrap();
//! let renderer = FormRenderer::from_config(config);
//! let html = renderer.render(&Form::new("settings"), true).unwrap();
//! assert_eq!(html, r#"<form name="settings" method="post" id="settings"></form>"#);
//! ```

mod collection;
mod error;
mod field;
pub mod fields;
mod form;
pub mod renderer;
pub mod validation;

pub use collection::FieldCollection;
pub use error::{FormError, Result, ValidationErrors};
pub use field::{Field, FieldValue, Message, REQUIRED_MESSAGE};
pub use form::{Form, ENC_TYPE_MULTIPART_FORM_DATA, METHOD_GET, METHOD_POST};
pub use renderer::{FormRenderer, SimpleFormRenderer};

pub use bootform_dom as dom;
