//! Boardflow Types - the shared canvas data model
//!
//! Defines the fundamental types every other crate consumes:
//! - Opaque board/object identifiers
//! - The `BoardObject` tagged union (six variants)
//! - Axis-aligned rectangle geometry and frame containment math
//!
//! The data model deliberately treats relationships as weak references:
//! `parent_id` and connector endpoints name other objects but never own
//! them. Coordinates are absolute canvas units regardless of parenting.

pub mod geometry;
pub mod ids;
pub mod object;

pub use geometry::{frame_interior, Point, Rect, FRAME_MARGIN, TITLE_BAR_INSET};
pub use ids::{BoardId, ObjectId};
pub use object::{BoardObject, ObjectBody, ObjectKind, ShapeKind};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
