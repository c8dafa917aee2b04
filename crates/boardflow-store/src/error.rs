//! Store error types

use boardflow_types::ObjectId;

/// Errors surfaced by a document store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Referenced object does not exist
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// A single batch exceeded the store's hard cap
    ///
    /// Callers are expected to chunk via `commit_chunked`; this error
    /// reaching a user is a bug in the caller.
    #[error("batch of {size} ops exceeds the {limit}-op cap")]
    BatchTooLarge { size: usize, limit: usize },

    /// Backend failure (I/O, transport, quota)
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// True when retrying the same call could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}
