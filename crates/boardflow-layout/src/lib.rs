//! Boardflow Layout - pure geometry, no I/O
//!
//! Given object bounding boxes and a mode, computes target positions.
//! Every algorithm is a deterministic function of its inputs (no
//! randomness, no clocks), so exact-output tests are possible. Widths
//! and heights are never mutated; only positions come back.

pub mod engine;
pub mod error;
pub mod types;

pub use engine::run_layout;
pub use error::LayoutError;
pub use types::{AlignEdge, CrossAlign, LayoutItem, LayoutMode, LayoutParams, Placement};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
