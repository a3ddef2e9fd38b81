//! Solr client implementation.
//!
//! This module provides the concrete implementation of `EngineClient`
//! using `reqwest` against Solr's update, select and ping handlers.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::config::SolrConfig;
use crate::errors::SearchError;
use crate::interfaces::EngineClient;
use crate::solr::update_body::render_update_body;
use crate::types::{SelectRequest, UpdateRequest, UpdateResponse};

/// Envelope of an update handler response.
#[derive(Debug, Deserialize)]
struct UpdateEnvelope {
    #[serde(rename = "responseHeader")]
    response_header: UpdateResponse,
}

/// Solr client implementation.
///
/// # Example
///
/// ```ignore
/// let config = SolrConfig::new("http://localhost:8983/solr", "products")?;
/// let client = SolrClient::new(config)?;
///
/// let mut request = client.create_update_request();
/// request.add_commit();
/// client.execute_update(&request).await?;
/// ```
pub struct SolrClient {
    client: Client,
    config: SolrConfig,
}

impl SolrClient {
    /// Create a new Solr client for the configured core.
    ///
    /// # Returns
    ///
    /// * `Ok(SolrClient)` - A new client instance
    /// * `Err(SearchError)` - If the HTTP client cannot be built
    pub fn new(config: SolrConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::config(e.to_string()))?;

        info!(
            url = %config.base_url,
            core = %config.core,
            timeout_secs = config.timeout.as_secs(),
            "Created Solr client"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SolrConfig {
        &self.config
    }

    /// Read the body of a failed response for error reporting.
    async fn failure_body(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }
}

#[async_trait]
impl EngineClient for SolrClient {
    #[instrument(skip(self, request), fields(
        request_id = %request.id(),
        documents = request.document_count(),
        commit = request.has_commit()
    ))]
    async fn execute_update(&self, request: &UpdateRequest) -> Result<UpdateResponse, SearchError> {
        let body = render_update_body(request);

        let response = self
            .client
            .post(self.config.update_url())
            .query(&[("wt", "json")])
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Update request failed");
            return Err(SearchError::update(format!(
                "Update failed with status {}: {}",
                status, error_body
            )));
        }

        let envelope: UpdateEnvelope = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        let header = envelope.response_header;
        if header.status != 0 {
            return Err(SearchError::update(format!(
                "Update returned status {}",
                header.status
            )));
        }

        debug!(qtime_ms = header.qtime_ms, "Update executed");
        Ok(header)
    }

    #[instrument(skip(self, request), fields(query = %request.query))]
    async fn execute_select(&self, request: &SelectRequest) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(self.config.select_url())
            .query(&request.params())
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = Self::failure_body(response).await;
            error!(status = %status, body = %error_body, "Select request failed");
            return Err(SearchError::query(format!(
                "Select failed with status {}: {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))
    }

    async fn ping(&self) -> Result<bool, SearchError> {
        let response = self
            .client
            .get(self.config.ping_url())
            .query(&[("wt", "json")])
            .send()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| SearchError::parse(e.to_string()))?;

        Ok(body.get("status").and_then(Value::as_str) == Some("OK"))
    }
}
