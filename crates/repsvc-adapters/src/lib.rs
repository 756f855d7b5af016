//! Infrastructure adapters for repsvc.
//!
//! This crate implements the ports defined in `repsvc-core::application::ports`.
//! It owns every text format: YAML, JSON and TOML in, YAML and JSON out.

pub mod context_loader;
pub mod renderer;

// Re-export commonly used adapters
pub use context_loader::FileContextLoader;
pub use renderer::{JsonRenderer, YamlRenderer, renderer_for};
