//! Interface definitions for the search engine client.
//!
//! This module defines the abstract `EngineClient` trait that allows the
//! pipeline to be driven against Solr or a test double.

mod engine_client;

pub use engine_client::EngineClient;
