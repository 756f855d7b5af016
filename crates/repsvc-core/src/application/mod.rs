//! Application layer for repsvc.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ExpandService, ContextService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! expansion rules itself. All of those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ContextService, ExpandService};

// Re-export port traits (for adapter implementation)
pub use ports::{ContextParser, DocumentRenderer};

pub use error::ApplicationError;
