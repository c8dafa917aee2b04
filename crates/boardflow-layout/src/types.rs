//! Layout engine input/output types

use boardflow_types::{ObjectId, Point, Rect};
use serde::{Deserialize, Serialize};

/// One object as the engine sees it: an id and its AABB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutItem {
    /// Construct from raw bounds
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ObjectId>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Bounds as a rectangle
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// New position for one object; sizes are never touched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
}

/// Cross-axis alignment for row/column layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrossAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Edge or axis used by the align mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlignEdge {
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
}

impl AlignEdge {
    /// True when the alignment moves objects along the x axis
    #[inline]
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        matches!(self, AlignEdge::Left | AlignEdge::Right | AlignEdge::CenterX)
    }
}

/// Layout mode with mode-specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum LayoutMode {
    Row,
    Column,
    #[serde(rename_all = "camelCase")]
    Grid { columns: usize },
    #[serde(rename_all = "camelCase")]
    Staggered { columns: usize },
    #[serde(rename_all = "camelCase")]
    Circular { radius: f64 },
    #[serde(rename_all = "camelCase")]
    Fan { arc_degrees: f64 },
    Pack,
    #[serde(rename_all = "camelCase")]
    Align { edge: AlignEdge },
    DistributeHorizontal,
    DistributeVertical,
}

/// Mode-independent parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Gap between neighboring objects
    pub spacing: f64,
    /// Start position (row/column/grid) or circle center (circular/fan)
    pub origin: Point,
    /// Cross-axis alignment for row/column
    pub cross_align: CrossAlign,
}

impl LayoutParams {
    /// With a custom gap
    #[inline]
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// With a custom start position / center
    #[inline]
    #[must_use]
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    /// With a cross-axis alignment
    #[inline]
    #[must_use]
    pub fn with_cross_align(mut self, align: CrossAlign) -> Self {
        self.cross_align = align;
        self
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            origin: Point::new(0.0, 0.0),
            cross_align: CrossAlign::Start,
        }
    }
}
