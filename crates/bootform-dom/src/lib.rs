//! # bootform-dom
//!
//! A small owned HTML tree used by `bootform` to assemble form markup.
//!
//! Nodes are plain values: renderers build detached subtrees and move them
//! into their parent. Attributes keep insertion order, and re-setting an
//! attribute overwrites it in place, so serialized output is deterministic.
//!
//! ```rust
//! use bootform_dom::Document;
//!
//! let mut doc = Document::new();
//! let mut input = doc.create_element("input");
//! input.set_attribute("type", "radio");
//! input.set_attribute("value", "yes");
//! input.set_flag("checked");
//!
//! let mut form = doc.create_element("form");
//! form.append_child(input);
//! doc.append_child(form);
//!
//! assert_eq!(
//!     doc.save_html(),
//!     r#"<form><input type="radio" value="yes" checked></form>"#,
//! );
//! ```

mod document;
mod node;
pub mod serialize;

pub use document::Document;
pub use node::{Element, Fragment, Node};
