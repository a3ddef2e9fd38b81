//! # Solr Indexer Shared
//!
//! Framework-neutral document model shared by the repository and pipeline
//! crates: field descriptors, boosts and the documents handed to an
//! indexing session.

pub mod document;
pub mod errors;
pub mod field;

pub use document::{DocumentEntry, FrameworkDocument};
pub use errors::DocumentError;
pub use field::{Boost, Field, FieldType};

/// A raw or normalized field value.
pub type FieldValue = serde_json::Value;
