//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "expand a context" or "load a context".

pub mod context_service;
pub mod expand_service;

pub use context_service::ContextService;
pub use expand_service::ExpandService;
