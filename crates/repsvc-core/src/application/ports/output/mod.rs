//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `repsvc-adapters` crate provides implementations.

use crate::domain::{Context, ContextFormat, DocumentFormat, OutputDocument};
use crate::error::RepsvcResult;

/// Port for turning an expanded document into text.
///
/// Implemented by:
/// - `repsvc_adapters::renderer::YamlRenderer` (default)
/// - `repsvc_adapters::renderer::JsonRenderer`
pub trait DocumentRenderer: Send + Sync {
    /// Encoding this renderer produces.
    fn format(&self) -> DocumentFormat;

    /// Serialize the document.
    fn render(&self, document: &OutputDocument) -> RepsvcResult<String>;
}

/// Port for reading a context from loosely typed text.
///
/// Implemented by:
/// - `repsvc_adapters::context_loader::FileContextLoader`
///
/// ## Design Notes
///
/// - Type mismatches are errors, never silently dropped values
/// - Missing required properties are *not* checked here; the expander
///   reports them so every caller gets the same error
pub trait ContextParser: Send + Sync {
    /// Parse `source`, encoded as `format`, into a context.
    fn parse(&self, source: &str, format: ContextFormat) -> RepsvcResult<Context>;
}
