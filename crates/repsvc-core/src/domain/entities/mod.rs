pub mod context;
pub mod descriptors;
pub mod document;
pub mod labels;

pub use crate::domain::DomainError;
pub use context::{Context, Properties};
pub use document::OutputDocument;
pub use labels::LabelSet;
