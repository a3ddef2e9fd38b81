//! Backend adapter interface.
//!
//! `SearchBackend` is the surface the surrounding framework programs against:
//! it hands out fields and documents, drives the indexing lifecycle, and
//! exposes the search and delete-all passthroughs.

mod solr_backend;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::PipelineError;
use crate::session::SessionSummary;
use solr_indexer_shared::{Field, FieldType, FrameworkDocument};

pub use solr_backend::SolrBackend;

/// Abstract interface for a search backend adapter.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Create and register a field descriptor.
    fn new_field(&mut self, id: &str, name: &str, field_type: FieldType) -> Field;

    /// Create an empty framework document.
    fn new_document(&self) -> FrameworkDocument {
        FrameworkDocument::new()
    }

    /// Configure the number of documents per mid-session flush.
    fn set_batch_size(&mut self, batch_size: usize);

    /// Open an indexing session.
    async fn start(&mut self) -> Result<(), PipelineError>;

    /// Index one document in the open session.
    async fn index_document(&mut self, document: &FrameworkDocument) -> Result<(), PipelineError>;

    /// Commit and close the open session.
    async fn end(&mut self) -> Result<SessionSummary, PipelineError>;

    /// Run a keyword query and return the engine's native response.
    async fn search(&self, keywords: &str) -> Result<Value, PipelineError>;

    /// Delete every document in the index and commit.
    async fn delete_all(&self) -> Result<(), PipelineError>;

    /// Provision the index.
    async fn create_index(&self) -> Result<(), PipelineError>;

    /// Check whether the backend is reachable and healthy.
    async fn health_check(&self) -> Result<bool, PipelineError>;
}
