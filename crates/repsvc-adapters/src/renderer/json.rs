//! JSON renderer.

use repsvc_core::{
    application::{ApplicationError, ports::DocumentRenderer},
    domain::{DocumentFormat, OutputDocument},
    error::RepsvcResult,
};
use tracing::instrument;

/// Renders documents as pretty-printed JSON with a trailing newline.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a new JSON renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for JsonRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Json
    }

    #[instrument(skip_all)]
    fn render(&self, document: &OutputDocument) -> RepsvcResult<String> {
        let mut text = serde_json::to_string_pretty(document).map_err(|e| {
            ApplicationError::RenderingFailed {
                format: "json",
                reason: e.to_string(),
            }
        })?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repsvc_core::domain::{Context, ManifestExpander};
    use serde_json::Value;

    #[test]
    fn renders_parseable_json() {
        let ctx = Context::new("api")
            .with_image("registry.local/api:2")
            .with_replicas(2)
            .with_container_port(8080)
            .with_service_port(80)
            .with_target_port(8080)
            .with_protocol("TCP");
        let doc = ManifestExpander::default().expand(&ctx).unwrap();
        let text = JsonRenderer::new().render(&doc).unwrap();

        assert!(text.ends_with("}\n"));

        let json: Value = serde_json::from_str(&text).unwrap();
        let port = &json["resources"][0]["properties"]["spec"]["ports"][0];
        assert_eq!(port["name"], "api");
        assert_eq!(port["port"], 80);
        assert_eq!(port["targetPort"], 8080);
        assert_eq!(port["protocol"], "TCP");
        assert_eq!(json["resources"][1]["name"], "api-rc");
    }
}
