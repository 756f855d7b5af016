//! YAML renderer, the expander's native output format.

use repsvc_core::{
    application::{ApplicationError, ports::DocumentRenderer},
    domain::{DocumentFormat, OutputDocument},
    error::RepsvcResult,
};
use tracing::instrument;

/// Renders documents as block-style YAML.
pub struct YamlRenderer;

impl YamlRenderer {
    /// Create a new YAML renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for YamlRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Yaml
    }

    #[instrument(skip_all)]
    fn render(&self, document: &OutputDocument) -> RepsvcResult<String> {
        serde_yaml::to_string(document).map_err(|e| {
            ApplicationError::RenderingFailed {
                format: "yaml",
                reason: e.to_string(),
            }
            .into()
        })
    }
}
