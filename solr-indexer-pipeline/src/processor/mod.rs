//! Processor module for the indexing pipeline.
//!
//! Transforms framework documents into engine-native documents.

mod document_builder;

pub use document_builder::DocumentBuilder;
