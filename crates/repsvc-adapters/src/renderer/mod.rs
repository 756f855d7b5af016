//! Document renderers.

pub mod json;
pub mod yaml;

pub use json::JsonRenderer;
pub use yaml::YamlRenderer;

use repsvc_core::{application::ports::DocumentRenderer, domain::DocumentFormat};

/// Renderer for the requested output format.
pub fn renderer_for(format: DocumentFormat) -> Box<dyn DocumentRenderer> {
    match format {
        DocumentFormat::Yaml => Box::new(YamlRenderer::new()),
        DocumentFormat::Json => Box::new(JsonRenderer::new()),
    }
}
