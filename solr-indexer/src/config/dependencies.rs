//! Dependency initialization and wiring for the indexer.

use std::sync::Arc;
use tracing::info;

use super::IndexerConfig;
use crate::IndexingError;
use solr_indexer_pipeline::SolrBackend;
use solr_indexer_repository::{EngineClient, SolrClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured backend ready to index.
    pub backend: SolrBackend,
}

impl Dependencies {
    /// Initialize all dependencies and verify that Solr is reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the client cannot be built or the ping fails
    pub async fn new(config: &IndexerConfig) -> Result<Self, IndexingError> {
        info!(
            solr_url = %config.solr.base_url,
            core = %config.solr.core,
            batch_size = config.session.batch_size,
            "Initializing dependencies"
        );

        let client = Self::client(config)?;

        let healthy = client
            .ping()
            .await
            .map_err(|e| IndexingError::config(format!("Solr health check failed: {}", e)))?;

        if !healthy {
            return Err(IndexingError::config(format!(
                "Solr core '{}' is unhealthy",
                config.solr.core
            )));
        }

        info!("Solr connection verified");

        Ok(Self {
            backend: SolrBackend::new(client, config.session.clone()),
        })
    }

    /// Wire the backend without contacting Solr.
    pub fn build(config: &IndexerConfig) -> Result<Self, IndexingError> {
        let client = Self::client(config)?;
        Ok(Self {
            backend: SolrBackend::new(client, config.session.clone()),
        })
    }

    fn client(config: &IndexerConfig) -> Result<Arc<dyn EngineClient>, IndexingError> {
        let client = SolrClient::new(config.solr.clone())
            .map_err(|e| IndexingError::config(format!("Failed to create Solr client: {}", e)))?;
        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solr_indexer_pipeline::SearchBackend;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer, batch_size: &str) -> IndexerConfig {
        let url = format!("{}/solr", server.uri());
        IndexerConfig::from_lookup(|key| match key {
            "SOLR_URL" => Some(url.clone()),
            "SOLR_CORE" => Some("books".to_string()),
            "SOLR_BATCH_SIZE" => Some(batch_size.to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_new_verifies_ping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/solr/books/admin/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"OK"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let deps = Dependencies::new(&config_for(&server, "25")).await.unwrap();

        assert_eq!(deps.backend.session().batch_size(), 25);
        assert!(deps.backend.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_new_rejects_unhealthy_core() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/solr/books/admin/ping"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = Dependencies::new(&config_for(&server, "0"))
            .await
            .err()
            .unwrap();

        assert!(matches!(err, IndexingError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_build_skips_ping() {
        let server = MockServer::start().await;

        let deps = Dependencies::build(&config_for(&server, "0")).unwrap();

        assert!(!deps.backend.session().is_open());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
