//! Document store trait and batch primitives

use crate::error::StoreError;
use async_trait::async_trait;
use boardflow_types::{BoardId, BoardObject, ObjectBody, ObjectId};

/// Hard cap on operations per atomic batch (store-imposed)
pub const MAX_BATCH_OPS: usize = 450;

/// Partial update of a single object
///
/// Only the populated fields are written. `parent` is doubly optional so
/// a patch can distinguish "leave the parent alone" from "clear it".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub color: Option<String>,
    pub text: Option<String>,
    pub parent: Option<Option<ObjectId>>,
}

impl ObjectPatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the patch writes nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Move to an absolute position
    #[inline]
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Resize
    #[inline]
    #[must_use]
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Rotate (degrees)
    #[inline]
    #[must_use]
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Recolor
    #[inline]
    #[must_use]
    pub fn colored(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replace text content
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attach to a frame
    #[inline]
    #[must_use]
    pub fn parented(mut self, parent: ObjectId) -> Self {
        self.parent = Some(Some(parent));
        self
    }

    /// Detach from any frame
    #[inline]
    #[must_use]
    pub fn unparented(mut self) -> Self {
        self.parent = Some(None);
        self
    }

    /// Apply to an object in place, bumping `updated_at`
    pub fn apply(&self, object: &mut BoardObject) {
        if let Some(x) = self.x {
            object.x = x;
        }
        if let Some(y) = self.y {
            object.y = y;
        }
        if let Some(w) = self.width {
            object.width = w;
        }
        if let Some(h) = self.height {
            object.height = h;
        }
        if let Some(r) = self.rotation {
            object.rotation = r;
        }
        if let Some(parent) = &self.parent {
            object.parent_id = parent.clone();
        }
        if let Some(color) = &self.color {
            match &mut object.body {
                ObjectBody::Sticky { color: c, .. }
                | ObjectBody::Shape { color: c, .. }
                | ObjectBody::Frame { color: c, .. }
                | ObjectBody::Text { color: c, .. }
                | ObjectBody::Connector { color: c, .. } => *c = color.clone(),
                ObjectBody::Sticker { .. } => {}
            }
        }
        if let Some(text) = &self.text {
            match &mut object.body {
                ObjectBody::Sticky { text: t, .. }
                | ObjectBody::Shape { text: t, .. }
                | ObjectBody::Text { text: t, .. } => *t = text.clone(),
                ObjectBody::Frame { title, .. } => *title = text.clone(),
                ObjectBody::Connector { label, .. } => *label = Some(text.clone()),
                ObjectBody::Sticker { .. } => {}
            }
        }
        object.updated_at = chrono_now();
    }
}

fn chrono_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// One operation inside an atomic batch
#[derive(Debug, Clone)]
pub enum BatchOp {
    /// Create or replace a full object
    Set(BoardObject),
    /// Partial update of an existing object (missing objects are skipped,
    /// matching last-write-wins semantics)
    Update(ObjectId, ObjectPatch),
    /// Delete by id (idempotent)
    Delete(ObjectId),
}

/// The shared document store, specified at its interface boundary
///
/// Semantics assumed of any implementation: per-document last-write-wins,
/// an atomic multi-document batch capped at [`MAX_BATCH_OPS`], and no
/// cross-batch transactionality.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Mint a fresh object id without writing anything
    ///
    /// Identity allocation is synchronous and side-effect free so the
    /// plan executor can pre-allocate ids for forward references.
    fn allocate_id(&self) -> ObjectId;

    /// Fetch one object
    async fn get(&self, board: &BoardId, id: &ObjectId) -> Result<Option<BoardObject>, StoreError>;

    /// Create or replace one object
    async fn set(&self, board: &BoardId, object: BoardObject) -> Result<(), StoreError>;

    /// Partially update one object
    async fn update(
        &self,
        board: &BoardId,
        id: &ObjectId,
        patch: ObjectPatch,
    ) -> Result<(), StoreError>;

    /// Delete one object (idempotent)
    async fn delete(&self, board: &BoardId, id: &ObjectId) -> Result<(), StoreError>;

    /// All objects on a board, in unspecified order
    async fn scan(&self, board: &BoardId) -> Result<Vec<BoardObject>, StoreError>;

    /// Commit up to [`MAX_BATCH_OPS`] operations atomically
    ///
    /// # Errors
    /// `BatchTooLarge` when the cap is exceeded; callers should go through
    /// [`commit_chunked`] instead of sizing batches by hand.
    async fn commit(&self, board: &BoardId, ops: Vec<BatchOp>) -> Result<(), StoreError>;
}

/// Commit an arbitrary number of ops, chunked at the store's cap
///
/// Each chunk is atomic on its own; a failure mid-way leaves earlier
/// chunks applied. Returns the number of batches committed.
pub async fn commit_chunked(
    store: &dyn DocumentStore,
    board: &BoardId,
    ops: Vec<BatchOp>,
) -> Result<usize, StoreError> {
    if ops.is_empty() {
        return Ok(0);
    }
    let mut batches = 0;
    let mut ops = ops;
    while !ops.is_empty() {
        let rest = ops.split_off(ops.len().min(MAX_BATCH_OPS));
        let chunk = std::mem::replace(&mut ops, rest);
        tracing::debug!(ops = chunk.len(), batch = batches + 1, "committing batch");
        store.commit(board, chunk).await?;
        batches += 1;
    }
    Ok(batches)
}
