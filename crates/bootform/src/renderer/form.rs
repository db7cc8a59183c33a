//! Delegating form renderer.

use std::sync::Arc;

use bootform_dom::{Document, Element};
use tracing::{debug, trace};

use super::{
    DefaultErrorRenderer, ErrorRenderer, FieldRenderer, InputRenderer, Layout, RendererConfig,
};
use crate::error::Result;
use crate::field::Field;
use crate::form::{Form, METHOD_POST};

/// Renders a [`Form`] by delegating each control to the field's
/// [`FieldRenderer`] and each error block to an [`ErrorRenderer`].
///
/// The renderer only holds configuration. Every call to
/// [`FormRenderer::render`] builds into its own [`Document`], so one
/// instance can render any number of forms, from any number of threads.
#[derive(Clone)]
pub struct FormRenderer {
    error_renderer: Arc<dyn ErrorRenderer>,
    layout: Layout,
    required_marker: String,
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("layout", &self.layout)
            .field("required_marker", &self.required_marker)
            .finish_non_exhaustive()
    }
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self::from_config(RendererConfig::default())
    }
}

impl FormRenderer {
    /// Creates a vertical renderer with the default error renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer from configuration.
    pub fn from_config(config: RendererConfig) -> Self {
        Self {
            error_renderer: Arc::new(DefaultErrorRenderer),
            layout: config.layout,
            required_marker: config.required_marker,
        }
    }

    /// Replaces the error renderer.
    #[must_use]
    pub fn error_renderer(mut self, renderer: impl ErrorRenderer + 'static) -> Self {
        self.error_renderer = Arc::new(renderer);
        self
    }

    /// Replaces the layout.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Renders `form` as a `<form>` element.
    ///
    /// Form attributes are copied in order, then `id` falls back to the
    /// form's name and `method` to `post`. With `display_errors` off, no
    /// field is marked as failing.
    ///
    /// # Errors
    ///
    /// Returns the first misconfiguration reported by a field renderer.
    /// No markup is produced in that case.
    pub fn render(&self, form: &Form, display_errors: bool) -> Result<String> {
        debug!(
            form = form.name().unwrap_or_default(),
            fields = form.fields().len(),
            display_errors,
            "rendering form"
        );

        let mut doc = Document::new();
        let mut root = doc.create_element("form");
        for (key, value) in form.attributes() {
            root.set_attribute(key, value);
        }

        let id = match form.id() {
            Some(id) => id.to_string(),
            None => root.attribute("name").unwrap_or_default().to_string(),
        };
        let method = form.method().unwrap_or(METHOD_POST).to_string();
        root.set_attribute("id", id);
        root.set_attribute("method", method);

        for field in form.fields() {
            let block = self
                .render_field(&doc, field, display_errors)
                .inspect_err(|e| debug!(field = %field.name, error = %e, "form render aborted"))?;
            root.append_child(block);
        }

        doc.append_child(root);
        Ok(doc.save_html())
    }

    fn render_field(&self, doc: &Document, field: &Field, display_errors: bool) -> Result<Element> {
        let mut block = doc.create_element("div");
        let label = self.layout.label(doc, field, &self.required_marker);
        let control = match &field.renderer {
            Some(renderer) => renderer.render(doc, field)?,
            None => InputRenderer.render(doc, field)?,
        };

        let errors = if field.is_valid() {
            None
        } else {
            self.render_errors(doc, field, &mut block, display_errors)
        };

        trace!(
            field = %field.name,
            renderer = field.renderer.as_ref().map_or("input renderer", |r| r.name()),
            has_errors = errors.is_some(),
            "rendered field"
        );
        Ok(self.layout.assemble(doc, block, label, control, errors))
    }

    fn render_errors(
        &self,
        doc: &Document,
        field: &Field,
        block: &mut Element,
        display_errors: bool,
    ) -> Option<Element> {
        if !(display_errors && self.error_renderer.should_render(field)) {
            return None;
        }
        block.set_attribute("class", "has-error ");
        Some(self.error_renderer.render(doc, field))
    }
}
