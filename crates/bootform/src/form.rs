//! Form: form-level attributes plus the field sequence.

use std::collections::BTreeMap;

use tracing::trace;

use crate::collection::FieldCollection;
use crate::error::{FormError, Result, ValidationErrors};
use crate::field::{Field, FieldValue, Message};
use crate::renderer::FormRenderer;

/// `method` value for POST forms, and the renderers' default.
pub const METHOD_POST: &str = "post";
/// `method` value for GET forms.
pub const METHOD_GET: &str = "get";
/// `enctype` for forms with file uploads.
pub const ENC_TYPE_MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// A form definition.
///
/// Form-level settings are kept as ordered attributes. The getters treat
/// an empty value the same as a missing one.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: FieldCollection,
    attributes: Vec<(String, String)>,
}

impl Form {
    /// Creates a form with the given `name` and `method="post"`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: FieldCollection::new(),
            attributes: vec![
                ("name".to_string(), name.into()),
                ("method".to_string(), METHOD_POST.to_string()),
            ],
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.add_field(field);
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.append(field);
    }

    /// Returns the fields.
    pub fn fields(&self) -> &FieldCollection {
        &self.fields
    }

    /// Returns the fields, mutably.
    pub fn fields_mut(&mut self) -> &mut FieldCollection {
        &mut self.fields
    }

    /// Sets an attribute, overwriting an existing one in place.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Returns a non-empty attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// Returns every attribute in insertion order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Returns the form name.
    pub fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    /// Returns the declared method.
    pub fn method(&self) -> Option<&str> {
        self.attribute("method")
    }

    /// Returns the declared id.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Returns the declared action.
    pub fn action(&self) -> Option<&str> {
        self.attribute("action")
    }

    /// Returns the declared encoding type.
    pub fn enctype(&self) -> Option<&str> {
        self.attribute("enctype")
    }

    /// Returns the declared CSS classes.
    pub fn class(&self) -> Option<&str> {
        self.attribute("class")
    }

    /// Sets the method.
    pub fn set_method(&mut self, method: impl Into<String>) {
        self.set_attribute("method", method);
    }

    /// Sets the id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.set_attribute("id", id);
    }

    /// Sets the action.
    pub fn set_action(&mut self, action: impl Into<String>) {
        self.set_attribute("action", action);
    }

    /// Sets the encoding type.
    pub fn set_enctype(&mut self, enctype: impl Into<String>) {
        self.set_attribute("enctype", enctype);
    }

    /// Sets the CSS classes.
    pub fn set_class(&mut self, class: impl Into<String>) {
        self.set_attribute("class", class);
    }

    /// Sets field values from submitted data. Unknown names are ignored.
    pub fn populate<I, K, V>(&mut self, data: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        for (name, value) in data {
            match self.fields.get_mut(name.as_ref()) {
                Some(field) => field.set_value(value),
                None => trace!(field = name.as_ref(), "ignoring value for unknown field"),
            }
        }
    }

    /// Sets field values from a JSON object of submitted data.
    ///
    /// Each member is either a string or an array of strings, as produced
    /// by single- and multi-valued controls.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Data`] when `json` is not such an object. No
    /// field is changed in that case.
    pub fn populate_json(&mut self, json: &str) -> Result<()> {
        let data: BTreeMap<String, FieldValue> =
            serde_json::from_str(json).map_err(FormError::Data)?;
        self.populate(data);
        Ok(())
    }

    /// Returns every field's name and value, in field order.
    pub fn values(&self) -> Vec<(&str, &FieldValue)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), &field.value))
            .collect()
    }

    /// Returns whether every field is valid.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(Field::is_valid)
    }

    /// Collects the messages of every invalid field, in field order.
    pub fn validation_errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        for field in &self.fields {
            let lines = field
                .messages()
                .iter()
                .flat_map(Message::lines)
                .map(str::to_string)
                .collect();
            errors.push(&field.name, lines);
        }
        errors
    }

    /// Renders the form with the default [`FormRenderer`].
    ///
    /// # Errors
    ///
    /// Returns a misconfiguration error when a field renderer cannot render
    /// its field.
    pub fn render(&self, display_errors: bool) -> Result<String> {
        FormRenderer::new().render(self, display_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_attributes() {
        let form = Form::new("login");
        assert_eq!(form.name(), Some("login"));
        assert_eq!(form.method(), Some(METHOD_POST));
        assert_eq!(form.id(), None);

        let keys: Vec<_> = form.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["name", "method"]);
    }

    #[test]
    fn test_empty_attribute_reads_as_unset() {
        let mut form = Form::new("search");
        form.set_method("");
        form.set_action("/search");
        assert_eq!(form.method(), None);
        assert_eq!(form.action(), Some("/search"));
    }

    #[test]
    fn test_set_attribute_keeps_position() {
        let form = Form::new("f").attr("class", "a").attr("name", "g");
        let keys: Vec<_> = form.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["name", "method", "class"]);
        assert_eq!(form.name(), Some("g"));
    }

    #[test]
    fn test_populate_and_validate() {
        let mut form = Form::new("profile")
            .field(Field::new("nick", "input", "text").required())
            .field(Field::new("tags", "input", "checkbox"));
        assert!(!form.is_valid());
        assert_eq!(
            form.validation_errors().get("nick"),
            Some(&[crate::field::REQUIRED_MESSAGE.to_string()][..])
        );

        form.populate([("nick", FieldValue::from("neo")), ("unknown", FieldValue::from("x"))]);
        assert!(form.is_valid());
        assert!(form.validation_errors().is_empty());

        let values = form.values();
        assert_eq!(values[0], ("nick", &FieldValue::from("neo")));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_populate_from_json() {
        let mut form = Form::new("profile")
            .field(Field::new("nick", "input", "text").required())
            .field(Field::new("tags", "input", "checkbox"));

        form.populate_json(r#"{"nick": "neo", "tags": ["a", "b"], "extra": "x"}"#)
            .unwrap();
        assert!(form.is_valid());
        assert_eq!(form.fields().get("nick").unwrap().value, FieldValue::from("neo"));
        assert_eq!(
            form.fields().get("tags").unwrap().value,
            FieldValue::from(vec!["a", "b"])
        );
    }

    #[test]
    fn test_populate_json_rejects_malformed_data() {
        let mut form = Form::new("profile").field(Field::new("nick", "input", "text"));
        let err = form.populate_json(r#"{"nick": 42}"#).unwrap_err();
        assert!(matches!(err, FormError::Data(_)));
        assert!(!err.is_misconfiguration());
        assert!(form.fields().get("nick").unwrap().value.is_blank());
    }
}
