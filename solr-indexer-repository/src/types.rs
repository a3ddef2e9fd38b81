//! Engine-native request and response types.
//!
//! An `UpdateRequest` collects the commands of one write round-trip
//! (documents to add, delete-by-query, commit) and is rendered into a Solr
//! JSON update body by the client. A `SelectRequest` carries a raw keyword
//! query.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use solr_indexer_shared::{Boost, FieldValue};

/// The query that matches every document in the index.
pub const MATCH_ALL_QUERY: &str = "*:*";

/// An engine-native document.
///
/// Created from an `UpdateRequest`, which it stays associated with. Field
/// values are keyed by destination name; writing the same name twice keeps
/// the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeDocument {
    request_id: Uuid,
    fields: Map<String, Value>,
    boost: Option<Boost>,
    field_boosts: HashMap<String, Boost>,
}

impl NativeDocument {
    fn new(request_id: Uuid) -> Self {
        Self {
            request_id,
            fields: Map::new(),
            boost: None,
            field_boosts: HashMap::new(),
        }
    }

    /// Id of the update request this document was created from.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Write a field value under its destination name.
    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Set the boost of a single field.
    pub fn set_field_boost(&mut self, name: impl Into<String>, boost: Boost) {
        self.field_boosts.insert(name.into(), boost);
    }

    /// Set the document boost.
    pub fn set_boost(&mut self, boost: Boost) {
        self.boost = Some(boost);
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn boost(&self) -> Option<Boost> {
        self.boost
    }

    pub fn field_boost(&self, name: &str) -> Option<Boost> {
        self.field_boosts.get(name).copied()
    }

    /// Number of field-level boosts set on this document.
    pub fn field_boost_count(&self) -> usize {
        self.field_boosts.len()
    }
}

/// One command of an update request.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateCommand {
    /// Add (or replace) documents.
    Add(Vec<NativeDocument>),
    /// Delete every document matching a query.
    DeleteQuery(String),
    /// Make all previously sent writes durable and visible.
    Commit,
}

/// An engine write request.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    id: Uuid,
    commands: Vec<UpdateCommand>,
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateRequest {
    /// Create an empty update request with a fresh id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            commands: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Create an empty native document belonging to this request.
    pub fn create_document(&self) -> NativeDocument {
        NativeDocument::new(self.id)
    }

    /// Add documents to the request.
    ///
    /// Consecutive additions are merged into a single `Add` command.
    pub fn add_documents<I>(&mut self, documents: I) -> &mut Self
    where
        I: IntoIterator<Item = NativeDocument>,
    {
        let mut documents = documents.into_iter().peekable();
        if documents.peek().is_none() {
            return self;
        }
        match self.commands.last_mut() {
            Some(UpdateCommand::Add(existing)) => existing.extend(documents),
            _ => self.commands.push(UpdateCommand::Add(documents.collect())),
        }
        self
    }

    /// Add a single document to the request.
    pub fn add_document(&mut self, document: NativeDocument) -> &mut Self {
        self.add_documents(std::iter::once(document))
    }

    /// Add a delete-by-query command.
    pub fn add_delete_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.commands.push(UpdateCommand::DeleteQuery(query.into()));
        self
    }

    /// Add a commit command.
    pub fn add_commit(&mut self) -> &mut Self {
        self.commands.push(UpdateCommand::Commit);
        self
    }

    /// Drop all commands, keeping the request id.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Remove and return every queued document, in order.
    ///
    /// Other commands are left in place.
    pub fn take_documents(&mut self) -> Vec<NativeDocument> {
        let mut documents = Vec::new();
        self.commands.retain_mut(|command| match command {
            UpdateCommand::Add(docs) => {
                documents.append(docs);
                false
            }
            _ => true,
        });
        documents
    }

    pub fn commands(&self) -> &[UpdateCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn has_commit(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, UpdateCommand::Commit))
    }

    /// Total number of documents across all `Add` commands.
    pub fn document_count(&self) -> usize {
        self.commands
            .iter()
            .map(|c| match c {
                UpdateCommand::Add(docs) => docs.len(),
                _ => 0,
            })
            .sum()
    }
}

/// An engine read request carrying a raw keyword query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectRequest {
    pub query: String,
    pub rows: Option<u32>,
    pub start: Option<u32>,
}

impl SelectRequest {
    /// Set the raw query string.
    pub fn set_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = query.into();
        self
    }

    /// Limit the number of returned documents.
    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Offset into the result set.
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Query-string parameters for the select handler.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone()), ("wt", "json".to_string())];
        if let Some(rows) = self.rows {
            params.push(("rows", rows.to_string()));
        }
        if let Some(start) = self.start {
            params.push(("start", start.to_string()));
        }
        params
    }
}

/// Header of a successful update response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateResponse {
    /// Engine status code, `0` on success.
    pub status: i64,
    /// Server-side processing time in milliseconds.
    #[serde(rename = "QTime", default)]
    pub qtime_ms: u64,
}
