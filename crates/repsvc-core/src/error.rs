//! Unified error handling for Repsvc Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Repsvc Core operations.
#[derive(Debug, Error, Clone)]
pub enum RepsvcError {
    /// Errors from the domain layer (invalid or incomplete context).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (parsing, rendering).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl RepsvcError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this error is caused by the caller's input rather than by
    /// repsvc itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::Conflict
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type RepsvcResult<T> = Result<T, RepsvcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_user_error() {
        let err: RepsvcError = DomainError::MissingField { field: "image" }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.is_user_error());
    }

    #[test]
    fn reserved_label_is_conflict() {
        let err: RepsvcError = DomainError::ReservedLabelKey { key: "name".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("override")));
    }

    #[test]
    fn rendering_failure_is_internal() {
        let err: RepsvcError = ApplicationError::RenderingFailed {
            format: "yaml",
            reason: "boom".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_user_error());
    }

    #[test]
    fn suggestions_carry_no_external_links() {
        let errors: [RepsvcError; 3] = [
            DomainError::MissingField { field: "name" }.into(),
            DomainError::InconsistentDocument("selector".into()).into(),
            ApplicationError::RenderingFailed {
                format: "json",
                reason: "boom".into(),
            }
            .into(),
        ];
        for err in errors {
            assert!(!err.suggestions().iter().any(|s| s.contains("://")), "{err}");
        }
    }
}
