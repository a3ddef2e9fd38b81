//! Solr backend adapter.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument};

use super::SearchBackend;
use crate::errors::PipelineError;
use crate::normalizer::NormalizerRegistry;
use crate::session::{IndexingSession, SessionConfig, SessionSummary};
use solr_indexer_repository::types::MATCH_ALL_QUERY;
use solr_indexer_repository::EngineClient;
use solr_indexer_shared::{DocumentError, Field, FieldType, FrameworkDocument};

/// Solr implementation of `SearchBackend`.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(SolrClient::new(config)?);
/// let mut backend = SolrBackend::new(client, SessionConfig::with_batch_size(500));
///
/// let title = backend.new_field("title", "title_t", FieldType::Text);
/// let doc = backend.new_document().with(&title, "Hello");
/// backend.start().await?;
/// backend.index_document(&doc).await?;
/// backend.end().await?;
/// ```
pub struct SolrBackend {
    client: Arc<dyn EngineClient>,
    session: IndexingSession,
    fields: HashMap<String, Field>,
}

impl SolrBackend {
    /// Create a backend with the default normalizers.
    pub fn new(client: Arc<dyn EngineClient>, config: SessionConfig) -> Self {
        Self::with_normalizers(client, config, NormalizerRegistry::default())
    }

    /// Create a backend with custom normalizers.
    pub fn with_normalizers(
        client: Arc<dyn EngineClient>,
        config: SessionConfig,
        normalizers: NormalizerRegistry,
    ) -> Self {
        let session = IndexingSession::with_normalizers(client.clone(), config, normalizers);
        Self {
            client,
            session,
            fields: HashMap::new(),
        }
    }

    /// Register a field descriptor, replacing any field with the same id.
    pub fn register_field(&mut self, field: Field) -> Field {
        self.fields.insert(field.id.clone(), field.clone());
        field
    }

    /// Look up a registered field by id.
    pub fn field(&self, id: &str) -> Result<&Field, PipelineError> {
        let field = self
            .fields
            .get(id)
            .ok_or_else(|| DocumentError::unknown_field(id))?;
        Ok(field)
    }

    pub fn session(&self) -> &IndexingSession {
        &self.session
    }
}

#[async_trait]
impl SearchBackend for SolrBackend {
    fn new_field(&mut self, id: &str, name: &str, field_type: FieldType) -> Field {
        self.register_field(Field::new(id, field_type).with_name(name))
    }

    fn set_batch_size(&mut self, batch_size: usize) {
        self.session.set_batch_size(batch_size);
    }

    async fn start(&mut self) -> Result<(), PipelineError> {
        self.session.start().await
    }

    async fn index_document(&mut self, document: &FrameworkDocument) -> Result<(), PipelineError> {
        self.session.index(document).await
    }

    async fn end(&mut self) -> Result<SessionSummary, PipelineError> {
        self.session.end().await
    }

    #[instrument(skip(self))]
    async fn search(&self, keywords: &str) -> Result<Value, PipelineError> {
        let mut select = self.client.create_select_request();
        select.set_query(keywords);
        Ok(self.client.execute_select(&select).await?)
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> Result<(), PipelineError> {
        let mut request = self.client.create_update_request();
        request.add_delete_query(MATCH_ALL_QUERY).add_commit();
        self.client.execute_update(&request).await?;

        info!("Deleted all documents");
        Ok(())
    }

    async fn create_index(&self) -> Result<(), PipelineError> {
        info!("Index provisioning is managed by the Solr server, nothing to create");
        Ok(())
    }

    async fn health_check(&self) -> Result<bool, PipelineError> {
        Ok(self.client.ping().await?)
    }
}
