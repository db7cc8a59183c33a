//! HTML serialization.

use std::fmt::Write as _;

use crate::node::{Element, Node};

/// Elements that never have an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns whether `name` is a void element.
pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

/// Returns whether `name` can be written as a tag name.
///
/// Tag names start with an ASCII letter and continue with ASCII
/// alphanumerics or `-`.
pub fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Returns whether `name` can be written as an attribute name.
///
/// Rejects the empty name and any name containing whitespace, control
/// characters, quotes, `<`, `>`, `/` or `=`.
pub fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Escapes text content.
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a double-quoted attribute value.
pub fn escape_attribute(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

pub(crate) fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape_text(text)),
    }
}

/// Writes `element`. An element with an unwritable tag name is replaced by
/// its children, and attributes with unwritable names are skipped.
pub(crate) fn write_element(out: &mut String, element: &Element) {
    if !is_tag_name(element.name()) {
        for child in element.children() {
            write_node(out, child);
        }
        return;
    }

    out.push('<');
    out.push_str(element.name());
    for (key, value) in element.attributes() {
        if !is_attribute_name(key) {
            continue;
        }
        match value {
            Some(value) => {
                let _ = write!(out, r#" {key}="{}""#, escape_attribute(value));
            }
            None => {
                out.push(' ');
                out.push_str(key);
            }
        }
    }
    out.push('>');

    if is_void(element.name()) {
        return;
    }

    for child in element.children() {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", element.name());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("<b>a & b</b>"), "&lt;b&gt;a &amp; b&lt;/b&gt;");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_attribute("a&b"), "a&amp;b");
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let input = Element::new("input")
            .with_attribute("type", "radio")
            .with_attribute("value", "3")
            .with_flag("checked");
        assert_eq!(input.to_html(), r#"<input type="radio" value="3" checked>"#);
    }

    #[test]
    fn test_empty_attribute_is_kept() {
        let label = Element::new("label")
            .with_attribute("for", "")
            .with_text("Choose");
        assert_eq!(label.to_html(), r#"<label for="">Choose</label>"#);
    }

    #[test]
    fn test_nested_serialization() {
        let div = Element::new("div")
            .with_attribute("class", "radio")
            .with_child(
                Element::new("label")
                    .with_child(Element::new("input").with_attribute("name", "choose"))
                    .with_text("Choose"),
            );
        assert_eq!(
            div.to_html(),
            r#"<div class="radio"><label><input name="choose">Choose</label></div>"#
        );
    }

    #[test]
    fn test_name_checks() {
        assert!(is_tag_name("input"));
        assert!(is_tag_name("my-widget2"));
        assert!(!is_tag_name(""));
        assert!(!is_tag_name("2col"));
        assert!(!is_tag_name("input onfocus"));

        assert!(is_attribute_name("data-id"));
        assert!(is_attribute_name("aria-label"));
        assert!(!is_attribute_name(""));
        assert!(!is_attribute_name("a b"));
        assert!(!is_attribute_name("x\" onclick=\"evil()"));
        assert!(!is_attribute_name("a=b"));
        assert!(!is_attribute_name("a>"));
    }

    #[test]
    fn test_bad_attribute_names_are_skipped() {
        let form = Element::new("form")
            .with_attribute("name", "f")
            .with_attribute("x\" onclick=\"evil()", "v")
            .with_flag("novalidate autofocus")
            .with_attribute("id", "f");
        assert_eq!(form.to_html(), r#"<form name="f" id="f"></form>"#);
    }

    #[test]
    fn test_bad_tag_name_keeps_children_only() {
        let bogus = Element::new("div><script")
            .with_attribute("class", "x")
            .with_text("a < b");
        assert_eq!(bogus.to_html(), "a &lt; b");

        let wrapped = Element::new("p").with_child(Element::new("").with_text("kept"));
        assert_eq!(wrapped.to_html(), "<p>kept</p>");
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("input"));
        assert!(is_void("BR"));
        assert!(!is_void("textarea"));
    }
}
