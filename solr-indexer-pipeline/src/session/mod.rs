//! Indexing session for the pipeline.
//!
//! Drives one start / index / end cycle against the engine client.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::errors::PipelineError;
use crate::loader::BatchBuffer;
use crate::normalizer::NormalizerRegistry;
use crate::processor::DocumentBuilder;
use solr_indexer_repository::{EngineClient, UpdateRequest};
use solr_indexer_shared::FrameworkDocument;

/// Configuration for an indexing session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Number of documents to buffer before a flush without commit.
    /// `0` buffers everything until `end`.
    pub batch_size: usize,
}

impl SessionConfig {
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self { batch_size }
    }
}

/// Statistics for a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Documents indexed between `start` and `end`.
    pub documents_indexed: usize,
    /// Mid-stream flushes (sends without commit).
    pub flushes: usize,
    /// Wall time from `start` to the end of the final commit.
    pub elapsed: Duration,
}

/// State held only while a session is open.
#[derive(Debug)]
struct OpenSession {
    request: UpdateRequest,
    started_at: Instant,
    documents_indexed: usize,
    flushes: usize,
}

/// An indexing session.
///
/// The session is either idle or open. `start` opens it with a fresh update
/// request, `index` buffers documents and flushes them without a commit
/// whenever a full batch has accumulated, and `end` sends whatever is left
/// together with a single commit before returning to idle.
///
/// Sends are awaited one at a time, so documents reach the engine in the
/// order they were indexed. A failed send leaves the unsent documents
/// buffered and the session open; calling `end` again resends them.
pub struct IndexingSession {
    client: Arc<dyn EngineClient>,
    builder: DocumentBuilder,
    buffer: BatchBuffer,
    open: Option<OpenSession>,
}

impl IndexingSession {
    /// Create an idle session with the default normalizers.
    pub fn new(client: Arc<dyn EngineClient>, config: SessionConfig) -> Self {
        Self::with_normalizers(client, config, NormalizerRegistry::default())
    }

    /// Create an idle session with custom normalizers.
    pub fn with_normalizers(
        client: Arc<dyn EngineClient>,
        config: SessionConfig,
        normalizers: NormalizerRegistry,
    ) -> Self {
        Self {
            client,
            builder: DocumentBuilder::new(normalizers),
            buffer: BatchBuffer::new(config.batch_size),
            open: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Number of buffered documents not yet sent.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn batch_size(&self) -> usize {
        self.buffer.batch_size()
    }

    /// Change the batch size. Takes effect on the next indexed document.
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.buffer.set_batch_size(batch_size);
    }

    /// Open the session.
    ///
    /// Fails with `SessionAlreadyOpen` if the session is open.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), PipelineError> {
        if self.open.is_some() {
            return Err(PipelineError::SessionAlreadyOpen);
        }

        let request = self.client.create_update_request();
        self.buffer.clear();

        info!(
            request_id = %request.id(),
            batch_size = self.buffer.batch_size(),
            "Indexing session started"
        );

        self.open = Some(OpenSession {
            request,
            started_at: Instant::now(),
            documents_indexed: 0,
            flushes: 0,
        });
        Ok(())
    }

    /// Build and buffer one document, flushing if a batch is complete.
    ///
    /// Fails with `SessionNotOpen` outside `start` / `end`.
    #[instrument(skip(self, document), fields(field_count = document.len()))]
    pub async fn index(&mut self, document: &FrameworkDocument) -> Result<(), PipelineError> {
        let open = self.open.as_mut().ok_or(PipelineError::SessionNotOpen)?;

        let native = self.builder.build(document, open.request.create_document());
        open.documents_indexed += 1;

        if self.buffer.push(native) {
            self.send(false).await?;
            if let Some(open) = self.open.as_mut() {
                open.flushes += 1;
            }
        }
        Ok(())
    }

    /// Send the remaining documents with a commit and close the session.
    ///
    /// Exactly one commit is issued, even if nothing is pending. On failure
    /// the session stays open with its documents buffered.
    #[instrument(skip(self))]
    pub async fn end(&mut self) -> Result<SessionSummary, PipelineError> {
        if self.open.is_none() {
            return Err(PipelineError::SessionNotOpen);
        }

        self.send(true).await?;

        let open = self.open.take().ok_or(PipelineError::SessionNotOpen)?;
        self.buffer.clear();

        let summary = SessionSummary {
            documents_indexed: open.documents_indexed,
            flushes: open.flushes,
            elapsed: open.started_at.elapsed(),
        };

        info!(
            request_id = %open.request.id(),
            documents = summary.documents_indexed,
            flushes = summary.flushes,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Indexing session committed"
        );

        Ok(summary)
    }

    /// Send all pending documents on the open request, optionally committing.
    async fn send(&mut self, commit: bool) -> Result<(), PipelineError> {
        let open = self.open.as_mut().ok_or(PipelineError::SessionNotOpen)?;
        let request = &mut open.request;

        request.reset();
        let documents = self.buffer.take();
        let count = documents.len();
        request.add_documents(documents);
        if commit {
            request.add_commit();
        }

        debug!(count, commit, "Sending update");

        match self.client.execute_update(request).await {
            Ok(response) => {
                request.reset();
                debug!(count, commit, qtime_ms = response.qtime_ms, "Update sent");
                Ok(())
            }
            Err(e) => {
                self.buffer.restore(request.take_documents());
                request.reset();
                Err(e.into())
            }
        }
    }
}
