//! Board objects
//!
//! `BoardObject` is a closed tagged union over six variants. Common
//! fields live on the struct; variant payloads live in the internally
//! tagged `body`. Unknown `type` tags are rejected at deserialization,
//! never defaulted.

use crate::geometry::Rect;
use crate::ids::ObjectId;
use serde::{Deserialize, Serialize};

/// One object on the canvas
///
/// `x`/`y` are always absolute canvas units, even for parented objects.
/// `parent_id` is advisory metadata, not storage nesting. `updated_at`
/// (millis since epoch) doubles as the z-order key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardObject {
    /// Store-assigned identity
    pub id: ObjectId,
    /// Variant payload, tagged with `type`
    #[serde(flatten)]
    pub body: ObjectBody,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f64,
    /// Weak reference to a containing frame, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ObjectId>,
    /// Actor that created the object
    pub created_by: String,
    /// Millis since epoch; also the z-order key
    pub updated_at: i64,
    /// Free-text provenance tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_label: Option<String>,
    /// Shared tag linking objects created by one logical operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_group_id: Option<String>,
}

impl BoardObject {
    /// Construct an object at the origin with the variant's default size
    #[must_use]
    pub fn new(id: ObjectId, body: ObjectBody, created_by: impl Into<String>) -> Self {
        let (width, height) = body.default_size();
        Self {
            id,
            body,
            x: 0.0,
            y: 0.0,
            width,
            height,
            rotation: 0.0,
            parent_id: None,
            created_by: created_by.into(),
            updated_at: chrono::Utc::now().timestamp_millis(),
            ai_label: None,
            ai_group_id: None,
        }
    }

    /// With absolute position
    #[inline]
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// With explicit size
    #[inline]
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// With parent frame
    #[inline]
    #[must_use]
    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    /// With provenance label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.ai_label = Some(label.into());
        self
    }

    /// With provenance group
    #[inline]
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.ai_group_id = Some(group.into());
        self
    }

    /// The object's AABB
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Which of the six kinds this object is
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.body.kind()
    }

    /// True for objects that may be parented to a frame
    ///
    /// Frames do not nest and connectors follow their endpoints instead.
    #[inline]
    #[must_use]
    pub fn can_have_parent(&self) -> bool {
        !matches!(self.kind(), ObjectKind::Frame | ObjectKind::Connector)
    }
}

/// Variant payloads, tagged with `type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectBody {
    #[serde(rename_all = "camelCase")]
    Sticky { text: String, color: String },
    #[serde(rename_all = "camelCase")]
    Shape {
        shape: ShapeKind,
        color: String,
        #[serde(default)]
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Frame {
        title: String,
        #[serde(default)]
        borderless: bool,
        /// Background fill; defaulted for payloads written before frames
        /// carried one
        #[serde(default = "default_frame_fill")]
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Sticker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        emoji: Option<String>,
        /// Image-search term the sticker was resolved from
        #[serde(default, skip_serializing_if = "Option::is_none")]
        query: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        font_size: f64,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Connector {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from_id: Option<ObjectId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_id: Option<ObjectId>,
        #[serde(default)]
        start_arrow: bool,
        #[serde(default)]
        end_arrow: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        color: String,
    },
}

fn default_frame_fill() -> String {
    "#F5F5F5".to_string()
}

impl ObjectBody {
    /// Kind discriminant
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectBody::Sticky { .. } => ObjectKind::Sticky,
            ObjectBody::Shape { .. } => ObjectKind::Shape,
            ObjectBody::Frame { .. } => ObjectKind::Frame,
            ObjectBody::Sticker { .. } => ObjectKind::Sticker,
            ObjectBody::Text { .. } => ObjectKind::Text,
            ObjectBody::Connector { .. } => ObjectKind::Connector,
        }
    }

    /// Default width/height applied when the creator gives no size
    #[must_use]
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ObjectBody::Sticky { .. } => (180.0, 180.0),
            ObjectBody::Shape { .. } => (160.0, 120.0),
            ObjectBody::Frame { .. } => (400.0, 300.0),
            ObjectBody::Sticker { .. } => (120.0, 120.0),
            ObjectBody::Text { .. } => (220.0, 40.0),
            ObjectBody::Connector { .. } => (0.0, 0.0),
        }
    }

    /// Visible text content, if the variant carries any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            ObjectBody::Sticky { text, .. }
            | ObjectBody::Shape { text, .. }
            | ObjectBody::Text { text, .. } => Some(text),
            ObjectBody::Frame { title, .. } => Some(title),
            ObjectBody::Sticker { .. } => None,
            ObjectBody::Connector { label, .. } => label.as_deref(),
        }
    }
}

/// Shape repertoire (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Rect,
    Circle,
    Triangle,
    Diamond,
    Star,
    Cross,
    Arrow,
    Hexagon,
}

/// Fieldless discriminant of the six object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    Sticky,
    Shape,
    Frame,
    Sticker,
    Text,
    Connector,
}

impl ObjectKind {
    /// All kinds, in canonical order
    pub const ALL: [ObjectKind; 6] = [
        ObjectKind::Sticky,
        ObjectKind::Shape,
        ObjectKind::Frame,
        ObjectKind::Sticker,
        ObjectKind::Text,
        ObjectKind::Connector,
    ];

    /// Resolve a user-facing word ("stickies", "arrows", ...) to a kind
    #[must_use]
    pub fn from_word(word: &str) -> Option<ObjectKind> {
        let w = word.trim().trim_end_matches('s');
        match w {
            "sticky" | "sticky note" | "stickie" | "note" | "postit" | "post-it" => {
                Some(ObjectKind::Sticky)
            }
            "shape" | "rectangle" | "box" => Some(ObjectKind::Shape),
            "frame" | "section" => Some(ObjectKind::Frame),
            "sticker" | "emoji" | "gif" => Some(ObjectKind::Sticker),
            "text" | "label" | "heading" => Some(ObjectKind::Text),
            "connector" | "arrow" | "line" | "edge" => Some(ObjectKind::Connector),
            _ => None,
        }
    }

    /// Human-readable singular name
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Sticky => "sticky note",
            ObjectKind::Shape => "shape",
            ObjectKind::Frame => "frame",
            ObjectKind::Sticker => "sticker",
            ObjectKind::Text => "text",
            ObjectKind::Connector => "connector",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
