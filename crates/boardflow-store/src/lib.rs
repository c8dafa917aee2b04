//! Boardflow Store - the document-store collaborator boundary
//!
//! The shared document store is specified only at its interface: per-object
//! CRUD, a scan over all objects in a board, and an atomic multi-write
//! batch primitive with a hard size cap. Callers exceeding the cap must
//! chunk; `commit_chunked` does so, with the documented caveat that only
//! each chunk is atomic.
//!
//! `MemoryStore` is the reference implementation used by tests and as a
//! default backing store for embedded use.

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{commit_chunked, BatchOp, DocumentStore, ObjectPatch, MAX_BATCH_OPS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
