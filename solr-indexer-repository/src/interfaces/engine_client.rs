//! Engine client trait definition.
//!
//! This module defines the abstract interface the indexing pipeline uses to
//! build and execute engine requests. The wire protocol lives entirely behind
//! this trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use crate::types::{SelectRequest, UpdateRequest, UpdateResponse};

/// Abstract interface for search engine requests.
///
/// Implementations can be swapped for different transports (HTTP, mock)
/// enabling easy testing of the indexing session.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// Failures are returned as `SearchError` and are never retried here.
#[async_trait]
pub trait EngineClient: Send + Sync {
    /// Create a new, empty update request.
    fn create_update_request(&self) -> UpdateRequest {
        UpdateRequest::new()
    }

    /// Create a new, empty select request.
    fn create_select_request(&self) -> SelectRequest {
        SelectRequest::default()
    }

    /// Send an update request to the engine.
    ///
    /// # Returns
    ///
    /// * `Ok(UpdateResponse)` - The engine accepted every command
    /// * `Err(SearchError)` - If the request could not be sent or was rejected
    async fn execute_update(&self, request: &UpdateRequest) -> Result<UpdateResponse, SearchError>;

    /// Run a select request and return the engine's native response.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut select = client.create_select_request();
    /// select.set_query("title:rust");
    /// let response = client.execute_select(&select).await?;
    /// println!("{}", response["response"]["numFound"]);
    /// ```
    async fn execute_select(&self, request: &SelectRequest) -> Result<Value, SearchError>;

    /// Check whether the engine is reachable and healthy.
    async fn ping(&self) -> Result<bool, SearchError>;
}
