//! Domain value objects: ResourceKind, ServiceType, LabelPolicy, formats.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one owns its string representation and its `FromStr` parser so the
//! CLI, config and adapters agree on spelling.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// `apiVersion` stamped on every emitted resource.
pub const API_VERSION: &str = "v1";

/// Namespace used when the context does not name one.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Label key synthesized from the resource name and used for selection.
pub const NAME_LABEL: &str = "name";

// ── ResourceKind ─────────────────────────────────────────────────────────────

/// The two resource kinds a replicated service expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Service,
    ReplicationController,
}

impl ResourceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::ReplicationController => "ReplicationController",
        }
    }

    /// Suffix appended to the base name to derive the resource name.
    pub const fn name_suffix(&self) -> &'static str {
        match self {
            Self::Service => "-service",
            Self::ReplicationController => "-rc",
        }
    }

    /// Derived resource name for a base name, e.g. `web` → `web-rc`.
    pub fn resource_name(&self, base: &str) -> String {
        format!("{base}{}", self.name_suffix())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ServiceType ──────────────────────────────────────────────────────────────

/// Explicit service exposure type.
///
/// Only set when the service is external; omission leaves the platform
/// default (cluster-internal) in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    LoadBalancer,
}

impl ServiceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoadBalancer => "LoadBalancer",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── LabelPolicy ──────────────────────────────────────────────────────────────

/// How custom labels interact with the reserved `name` label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Reject custom labels that carry the reserved key.
    #[default]
    Reject,
    /// Let a custom `name` label overwrite the synthesized one.
    Override,
}

impl LabelPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Override => "override",
        }
    }
}

impl fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" | "strict" => Ok(Self::Reject),
            "override" | "legacy" => Ok(Self::Override),
            other => Err(DomainError::InvalidFieldType {
                field: "label_policy".into(),
                expected: "one of: reject, override",
                found: other.into(),
            }),
        }
    }
}

// ── DocumentFormat ───────────────────────────────────────────────────────────

/// Text encoding of the expanded document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => Err(DomainError::InvalidFieldType {
                field: "format".into(),
                expected: "one of: yaml, json",
                found: other.into(),
            }),
        }
    }
}

// ── ContextFormat ────────────────────────────────────────────────────────────

/// Text encoding of a context file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl ContextFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ContextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContextFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(DomainError::InvalidFieldType {
                field: "input format".into(),
                expected: "one of: yaml, json, toml",
                found: other.into(),
            }),
        }
    }
}
