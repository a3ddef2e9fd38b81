//! # Solr Indexer Pipeline
//!
//! This crate turns framework documents into Solr updates.
//!
//! ## Architecture
//!
//! 1. **Normalizer**: Maps raw field values to engine-compatible values
//! 2. **Processor**: Builds native documents, applying boosts
//! 3. **Loader**: Buffers native documents and decides when to flush
//! 4. **Session**: Drives start / index / end and owns the open update request
//! 5. **Backend**: The adapter surface callers program against

pub mod backend;
pub mod errors;
pub mod loader;
pub mod normalizer;
pub mod processor;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{SearchBackend, SolrBackend};
pub use errors::PipelineError;
pub use loader::BatchBuffer;
pub use normalizer::{DateNormalizer, Normalizer, NormalizerRegistry};
pub use processor::DocumentBuilder;
pub use session::{IndexingSession, SessionConfig, SessionSummary};
