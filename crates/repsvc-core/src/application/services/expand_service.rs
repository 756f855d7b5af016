//! Expand Service - main application orchestrator.
//!
//! This service coordinates the expansion workflow:
//! 1. Expand the context into an `OutputDocument` (domain)
//! 2. Render the document through the `DocumentRenderer` port
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument};

use crate::{
    application::ports::DocumentRenderer,
    domain::{Context, DocumentFormat, LabelPolicy, ManifestExpander, OutputDocument},
    error::{RepsvcError, RepsvcResult},
};

/// Main expansion service.
pub struct ExpandService {
    renderer: Box<dyn DocumentRenderer>,
    expander: ManifestExpander,
}

impl ExpandService {
    /// Create a new expand service using the default label policy.
    pub fn new(renderer: Box<dyn DocumentRenderer>) -> Self {
        Self {
            renderer,
            expander: ManifestExpander::default(),
        }
    }

    /// Use a specific label policy.
    pub fn with_policy(mut self, policy: LabelPolicy) -> Self {
        self.expander = ManifestExpander::new(policy);
        self
    }

    /// Encoding of the text returned by [`Self::expand`].
    pub fn format(&self) -> DocumentFormat {
        self.renderer.format()
    }

    /// Expand a context and render it to text.
    ///
    /// This is the main use case. Nothing is rendered when expansion fails.
    #[instrument(
        skip_all,
        fields(
            name = %context.name,
            format = %self.renderer.format(),
            policy = %self.expander.policy()
        )
    )]
    pub fn expand(&self, context: &Context) -> RepsvcResult<String> {
        let document = self.expand_document(context)?;
        let text = self.renderer.render(&document)?;

        info!(
            resources = document.len(),
            bytes = text.len(),
            "Manifest rendered"
        );
        Ok(text)
    }

    /// Expand a context without rendering it.
    pub fn expand_document(&self, context: &Context) -> RepsvcResult<OutputDocument> {
        self.expander.expand(context).map_err(RepsvcError::Domain)
    }
}
