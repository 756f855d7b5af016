//! Repsvc Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for expanding a
//! *replicated service* (one logical service unit) into the two primitive
//! resources the cluster actually needs: a `Service` and a
//! `ReplicationController`.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           repsvc-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ExpandService, ContextService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: DocumentRenderer, Parser)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    repsvc-adapters (Infrastructure)     │
//! │  (YamlRenderer, JsonRenderer, Loader)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Context, LabelSet, ManifestExpander)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use repsvc_core::{application::ExpandService, domain::Context};
//!
//! let context = Context::new("web")
//!     .with_image("nginx")
//!     .with_replicas(3)
//!     .with_container_port(80);
//!
//! // `renderer` is any `DocumentRenderer`, e.g. `repsvc_adapters::YamlRenderer`.
//! let service = ExpandService::new(renderer);
//! let manifest = service.expand(&context).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ContextService, ExpandService,
        ports::{ContextParser, DocumentRenderer},
    };
    pub use crate::domain::{
        Context, ContextFormat, ControllerDescriptor, DocumentFormat, LabelPolicy, LabelSet,
        ManifestExpander, OutputDocument, PortDescriptor, Properties, ServiceDescriptor,
    };
    pub use crate::error::{RepsvcError, RepsvcResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
