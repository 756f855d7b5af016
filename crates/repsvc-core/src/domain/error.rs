// ============================================================================
// domain/error.rs - EXPANSION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingField { field: &'static str },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("labels must be a mapping of string to string, found {found}")]
    InvalidLabelsType { found: String },

    #[error("field '{field}' must be {expected}, found {found}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("custom labels may not set the reserved key '{key}'")]
    ReservedLabelKey { key: String },

    // ========================================================================
    // Invariant Violations (bugs)
    // ========================================================================
    #[error("Expanded document is inconsistent: {0}")]
    InconsistentDocument(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field } => vec![
                format!("'{}' is required to expand a replicated service", field),
                match *field {
                    "name" => "Set the top-level 'name' of the context".into(),
                    other => format!("Set 'properties.{}' in the context", other),
                },
                "Required: name, image, replicas, container_port".into(),
            ],
            Self::InvalidLabelsType { found } => vec![
                format!("'labels' was {}", found),
                "Write labels as a mapping, e.g.:".into(),
                "  labels:".into(),
                "    tier: frontend".into(),
            ],
            Self::InvalidFieldType {
                field, expected, ..
            } => vec![format!("Change '{}' to {}", field, expected)],
            Self::ReservedLabelKey { key } => vec![
                format!(
                    "'{}' is generated from the resource name and used by the service selector",
                    key
                ),
                "Remove it from the custom labels".into(),
                "Or opt in to the legacy override behaviour (label policy 'override')".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. }
            | Self::InvalidLabelsType { .. }
            | Self::InvalidFieldType { .. } => ErrorCategory::Validation,
            Self::ReservedLabelKey { .. } => ErrorCategory::Conflict,
            Self::InconsistentDocument(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}
