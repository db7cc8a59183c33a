//! Renderer configuration.

use serde::{Deserialize, Serialize};

use super::Layout;
use crate::error::Result;

fn default_required_marker() -> String {
    "* ".to_string()
}

/// Settings for [`FormRenderer`](super::FormRenderer).
///
/// Every key is optional in serialized form:
///
/// ```rust
/// use bootform::renderer::{Layout, RendererConfig};
///
/// let config = RendererConfig::from_json(r#"{"layout": {"type": "horizontal"}}"#).unwrap();
/// assert_eq!(config.layout, Layout::horizontal());
/// assert_eq!(config.required_marker, "* ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Field arrangement.
    pub layout: Layout,
    /// Text of the marker prepended to required fields' labels.
    pub required_marker: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            required_marker: default_required_marker(),
        }
    }
}

impl RendererConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Config`](crate::FormError::Config) on malformed JSON
    /// or unknown layout types.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
