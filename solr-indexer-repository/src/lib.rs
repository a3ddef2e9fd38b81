//! # Solr Indexer Repository
//!
//! This crate provides the engine client seam used by the indexing pipeline.
//! It defines the engine-native request types, the `EngineClient` trait, and
//! a concrete implementation that talks to Solr over HTTP.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod solr;
pub mod types;

pub use config::SolrConfig;
pub use errors::SearchError;
pub use interfaces::EngineClient;
pub use solr::SolrClient;
pub use types::{NativeDocument, SelectRequest, UpdateCommand, UpdateRequest, UpdateResponse};
