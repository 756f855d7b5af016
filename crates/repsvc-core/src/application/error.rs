//! Application layer errors.
//!
//! These errors represent failures in orchestration, not expansion rules.
//! Those are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The context text could not be parsed at all.
    #[error("Failed to parse {format} context: {reason}")]
    ContextParse {
        format: &'static str,
        reason: String,
    },

    /// Document rendering failed.
    #[error("Rendering {format} failed: {reason}")]
    RenderingFailed {
        format: &'static str,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ContextParse { format, reason } => vec![
                format!("The context is not valid {}: {}", format, reason),
                "A context looks like:".into(),
                "  name: web".into(),
                "  properties:".into(),
                "    image: nginx".into(),
                "    replicas: 3".into(),
                "    container_port: 80".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "The manifest could not be serialized".into(),
                "Try a different output format".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ContextParse { .. } => ErrorCategory::Validation,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
