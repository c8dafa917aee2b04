//! Axis-aligned rectangle geometry
//!
//! Everything here is pure math over absolute canvas units. Frame
//! containment (the auto-parenting test) is an AABB-inside-AABB check
//! against the frame's *interior*: the frame bounds shrunk by a fixed
//! margin, plus a title-bar inset at the top for bordered frames.

use serde::{Deserialize, Serialize};

/// Margin subtracted from every frame edge before containment tests
pub const FRAME_MARGIN: f64 = 8.0;

/// Extra top inset reserved for the title bar of a bordered frame
pub const TITLE_BAR_INSET: f64 = 36.0;

/// A point in absolute canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Construct a point
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when `other` lies entirely inside `self` (edges inclusive)
    #[inline]
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rectangles overlap at all
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink uniformly by `amount` on every side
    ///
    /// Degenerate results (negative extent) collapse to a zero-size
    /// rectangle at the center, so containment against them always fails.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Rect {
        let width = self.width - amount * 2.0;
        let height = self.height - amount * 2.0;
        if width <= 0.0 || height <= 0.0 {
            let c = self.center();
            return Rect::new(c.x, c.y, 0.0, 0.0);
        }
        Rect::new(self.x + amount, self.y + amount, width, height)
    }

    /// Shrink the top edge by `amount`
    #[must_use]
    pub fn inset_top(&self, amount: f64) -> Rect {
        let height = self.height - amount;
        if height <= 0.0 {
            let c = self.center();
            return Rect::new(c.x, c.y, 0.0, 0.0);
        }
        Rect::new(self.x, self.y + amount, self.width, height)
    }
}

/// Interior of a frame for containment purposes
///
/// Bordered frames additionally reserve a title bar strip at the top.
#[must_use]
pub fn frame_interior(bounds: &Rect, borderless: bool) -> Rect {
    let inner = bounds.inset(FRAME_MARGIN);
    if borderless {
        inner
    } else {
        inner.inset_top(TITLE_BAR_INSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_edge_inclusive() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 50.0, 50.0)));
        assert!(!outer.contains_rect(&Rect::new(60.0, 60.0, 50.0, 50.0)));
    }

    #[test]
    fn partial_overlap_is_not_containment() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let partial = Rect::new(-10.0, 10.0, 50.0, 50.0);
        assert!(outer.intersects(&partial));
        assert!(!outer.contains_rect(&partial));
    }

    #[test]
    fn bordered_frame_interior_reserves_title_bar() {
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let bordered = frame_interior(&bounds, false);
        let borderless = frame_interior(&bounds, true);

        assert_eq!(borderless.y, FRAME_MARGIN);
        assert_eq!(bordered.y, FRAME_MARGIN + TITLE_BAR_INSET);
        assert_eq!(bordered.x, borderless.x);
    }

    #[test]
    fn degenerate_inset_contains_nothing() {
        let tiny = Rect::new(0.0, 0.0, 10.0, 10.0);
        let interior = frame_interior(&tiny, false);
        assert!(!interior.contains_rect(&Rect::new(1.0, 1.0, 2.0, 2.0)));
    }
}
