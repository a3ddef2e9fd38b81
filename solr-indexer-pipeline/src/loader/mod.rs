//! Loader module for the indexing pipeline.
//!
//! Buffers native documents between flushes.

use solr_indexer_repository::NativeDocument;

/// In-memory buffer of native documents awaiting a send.
///
/// The flush trigger is an explicit counter of documents pushed since the
/// last `take`. A `batch_size` of `0` disables mid-stream flushing: documents
/// accumulate until the session ends. Changing the batch size applies from
/// the next push.
#[derive(Debug, Default)]
pub struct BatchBuffer {
    pending: Vec<NativeDocument>,
    batch_size: usize,
    since_flush: usize,
}

impl BatchBuffer {
    /// Create an empty buffer.
    pub fn new(batch_size: usize) -> Self {
        Self {
            pending: Vec::new(),
            batch_size,
            since_flush: 0,
        }
    }

    /// Append a document.
    ///
    /// Returns `true` when the buffer has reached the batch size and should
    /// be flushed.
    pub fn push(&mut self, document: NativeDocument) -> bool {
        self.pending.push(document);
        self.since_flush += 1;
        self.batch_size > 0 && self.since_flush >= self.batch_size
    }

    /// Drain all pending documents in append order and reset the counter.
    pub fn take(&mut self) -> Vec<NativeDocument> {
        self.since_flush = 0;
        std::mem::take(&mut self.pending)
    }

    /// Put documents back in front of anything pushed since they were taken.
    ///
    /// Used when a send fails so the documents are retried with the next one.
    /// The counter is set to the restored length, so when a full batch is
    /// restored the next push triggers a flush carrying every pending
    /// document, which may exceed the batch size.
    pub fn restore(&mut self, mut documents: Vec<NativeDocument>) {
        documents.append(&mut self.pending);
        self.since_flush = documents.len();
        self.pending = documents;
    }

    /// Discard all pending documents.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.since_flush = 0;
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size;
    }
}
