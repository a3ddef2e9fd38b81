//! Test doubles shared by the pipeline tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Mutex;

use solr_indexer_repository::{
    EngineClient, SearchError, SelectRequest, UpdateCommand, UpdateRequest, UpdateResponse,
};
use solr_indexer_shared::{Field, FieldType, FrameworkDocument};

/// Engine client that records every request it executes.
#[derive(Default)]
pub(crate) struct RecordingClient {
    pub updates: Mutex<Vec<UpdateRequest>>,
    pub selects: Mutex<Vec<SelectRequest>>,
    pub fail_updates: AtomicBool,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_updates.store(failing, Ordering::SeqCst);
    }

    /// Document ids of every executed update, one list per send.
    pub async fn sent_batches(&self) -> Vec<Vec<String>> {
        self.updates.lock().await.iter().map(document_ids).collect()
    }

    /// Number of commit commands across all executed updates.
    pub async fn commit_count(&self) -> usize {
        self.updates
            .lock()
            .await
            .iter()
            .flat_map(|r| r.commands())
            .filter(|c| matches!(c, UpdateCommand::Commit))
            .count()
    }
}

#[async_trait]
impl EngineClient for RecordingClient {
    async fn execute_update(&self, request: &UpdateRequest) -> Result<UpdateResponse, SearchError> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(SearchError::connection("Mock failure"));
        }
        self.updates.lock().await.push(request.clone());
        Ok(UpdateResponse::default())
    }

    async fn execute_select(&self, request: &SelectRequest) -> Result<Value, SearchError> {
        self.selects.lock().await.push(request.clone());
        Ok(json!({
            "response": { "numFound": 0, "start": 0, "docs": [] },
            "echo": request.query,
        }))
    }

    async fn ping(&self) -> Result<bool, SearchError> {
        Ok(true)
    }
}

/// Ids of the documents added by an update request, in send order.
pub(crate) fn document_ids(request: &UpdateRequest) -> Vec<String> {
    request
        .commands()
        .iter()
        .flat_map(|c| match c {
            UpdateCommand::Add(docs) => docs.clone(),
            _ => Vec::new(),
        })
        .filter_map(|d| d.field("id").and_then(Value::as_str).map(str::to_string))
        .collect()
}

/// A document with only an `id` field.
pub(crate) fn doc_with_id(id: &str) -> FrameworkDocument {
    let field = Field::new("id", FieldType::String);
    FrameworkDocument::new().with(&field, id)
}
