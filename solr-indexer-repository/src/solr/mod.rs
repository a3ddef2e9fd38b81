//! Solr implementation of the engine client.
//!
//! This module provides a concrete implementation of `EngineClient`
//! using Solr's JSON update and select handlers.

mod client;
mod update_body;

pub use client::SolrClient;
pub use update_body::render_update_body;
