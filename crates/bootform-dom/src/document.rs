//! Document: node factory and owner of the top-level nodes.

use crate::node::{Element, Fragment, Node};
use crate::serialize;

/// An HTML document under construction.
///
/// Renderers receive a `&Document` to create nodes, build subtrees they
/// own, and hand them back. The caller appends the finished root with
/// [`Document::append_child`] and serializes once.
#[derive(Debug, Clone, Default)]
pub struct Document {
    children: Vec<Node>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached element.
    pub fn create_element(&self, name: &str) -> Element {
        Element::new(name)
    }

    /// Creates a detached element with a text child.
    pub fn create_element_with_text(&self, name: &str, text: impl Into<String>) -> Element {
        let mut element = Element::new(name);
        element.set_text(text);
        element
    }

    /// Creates a detached text node.
    pub fn create_text_node(&self, text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }

    /// Creates an empty fragment.
    pub fn create_fragment(&self) -> Fragment {
        Fragment::new()
    }

    /// Appends a top-level node.
    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Returns the top-level nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Serializes every top-level node as HTML.
    pub fn save_html(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            serialize::write_node(&mut out, node);
        }
        out
    }
}
