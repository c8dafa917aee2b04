//! In-memory reference store
//!
//! Backs tests and embedded use. Batches are applied under a per-board
//! write lock so a committed batch is observed all-or-nothing by `scan`,
//! mirroring the atomicity contract of the real backend.

use crate::error::StoreError;
use crate::store::{BatchOp, DocumentStore, ObjectPatch, MAX_BATCH_OPS};
use async_trait::async_trait;
use boardflow_types::{BoardId, BoardObject, ObjectId};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

type Board = Arc<Mutex<HashMap<ObjectId, BoardObject>>>;

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    boards: DashMap<BoardId, Board>,
    commits: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of atomic batch commits issued so far
    ///
    /// Used by tests asserting chunking behavior.
    #[inline]
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    fn board(&self, board: &BoardId) -> Board {
        self.boards
            .entry(board.clone())
            .or_insert_with(|| Arc::new(Mutex::new(HashMap::new())))
            .clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn allocate_id(&self) -> ObjectId {
        ObjectId::generate()
    }

    async fn get(&self, board: &BoardId, id: &ObjectId) -> Result<Option<BoardObject>, StoreError> {
        let board = self.board(board);
        let objects = board.lock().await;
        Ok(objects.get(id).cloned())
    }

    async fn set(&self, board: &BoardId, object: BoardObject) -> Result<(), StoreError> {
        let board = self.board(board);
        let mut objects = board.lock().await;
        objects.insert(object.id.clone(), object);
        Ok(())
    }

    async fn update(
        &self,
        board: &BoardId,
        id: &ObjectId,
        patch: ObjectPatch,
    ) -> Result<(), StoreError> {
        let board = self.board(board);
        let mut objects = board.lock().await;
        let object = objects
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        patch.apply(object);
        Ok(())
    }

    async fn delete(&self, board: &BoardId, id: &ObjectId) -> Result<(), StoreError> {
        let board = self.board(board);
        let mut objects = board.lock().await;
        objects.remove(id);
        Ok(())
    }

    async fn scan(&self, board: &BoardId) -> Result<Vec<BoardObject>, StoreError> {
        let board = self.board(board);
        let objects = board.lock().await;
        Ok(objects.values().cloned().collect())
    }

    async fn commit(&self, board: &BoardId, ops: Vec<BatchOp>) -> Result<(), StoreError> {
        if ops.len() > MAX_BATCH_OPS {
            return Err(StoreError::BatchTooLarge {
                size: ops.len(),
                limit: MAX_BATCH_OPS,
            });
        }
        let board = self.board(board);
        let mut objects = board.lock().await;
        for op in ops {
            match op {
                BatchOp::Set(object) => {
                    objects.insert(object.id.clone(), object);
                }
                BatchOp::Update(id, patch) => {
                    // Missing targets are skipped, not failed: last-write-wins
                    // semantics make a concurrent delete indistinguishable.
                    if let Some(object) = objects.get_mut(&id) {
                        patch.apply(object);
                    }
                }
                BatchOp::Delete(id) => {
                    objects.remove(&id);
                }
            }
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
