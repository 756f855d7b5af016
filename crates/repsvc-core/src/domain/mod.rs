// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for repsvc.
//!
//! This module contains the pure expansion logic. Parsing context files and
//! rendering documents to text are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod expander;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    context::{Context, Properties},
    descriptors::{
        Container, ContainerPort, ControllerDescriptor, ControllerSpec, ObjectMeta, PodSpec,
        PodTemplate, PodTemplateMeta, PortDescriptor, ServiceDescriptor, ServiceSpec,
    },
    document::{OutputDocument, Resource, ResourceProperties},
    labels::LabelSet,
};

pub use error::{DomainError, ErrorCategory};

pub use expander::{ManifestExpander, generate_labels, generate_ports};

pub use value_objects::{
    API_VERSION, ContextFormat, DEFAULT_NAMESPACE, DocumentFormat, LabelPolicy, NAME_LABEL,
    ResourceKind, ServiceType,
};

pub use validation::DomainValidator;
