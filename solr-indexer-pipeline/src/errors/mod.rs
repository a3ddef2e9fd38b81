//! Error types for the indexing pipeline.

use solr_indexer_repository::SearchError;
use solr_indexer_shared::DocumentError;
use thiserror::Error;

/// Errors that can occur while driving an indexing session.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// `start` was called while a session was already open.
    #[error("Indexing session is already open")]
    SessionAlreadyOpen,

    /// `index` or `end` was called without an open session.
    #[error("No indexing session is open")]
    SessionNotOpen,

    /// Invalid document or field.
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from the search engine.
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}
