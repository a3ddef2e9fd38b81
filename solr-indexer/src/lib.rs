//! # Solr Indexer
//!
//! Entry point library for the Solr indexing adapter.
//!
//! This crate reads the adapter configuration from the environment, sets up
//! logging, and wires the Solr client into a ready-to-use backend.

pub mod config;
pub mod telemetry;

pub use config::{Dependencies, IndexerConfig, LogFormat};
pub use telemetry::init_tracing;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] solr_indexer_pipeline::PipelineError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] solr_indexer_repository::SearchError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
