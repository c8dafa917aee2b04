//! Layout error types

/// Errors from the layout engine
///
/// All inputs are caller-controlled, so these indicate caller bugs or
/// out-of-range tool arguments, never environmental failures.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    /// Grid/staggered layouts need at least one column
    #[error("column count must be at least 1")]
    InvalidColumns,

    /// Fan layouts need a positive arc
    #[error("arc of {0} degrees is not positive")]
    InvalidArc(f64),

    /// Spacing must be finite and non-negative
    #[error("spacing {0} is not a finite non-negative number")]
    InvalidSpacing(f64),
}
