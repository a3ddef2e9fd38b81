//! Error types for the indexer repository.

mod search_error;

pub use search_error::SearchError;
