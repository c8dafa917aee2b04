//! Intent classifier
//!
//! `classify(text)` is pure and deterministic: an ordered list of
//! independent predicate+extractor pairs, evaluated in fixed priority
//! order, first match wins. Matching runs against a lowercased copy of
//! the input; extracted labels keep their original casing.
//!
//! A matcher that recognizes its shape but fails a guard (count bounds,
//! content words) returns `None`, letting later matchers - and finally
//! the tool-calling loop - take over.

use boardflow_types::{ObjectKind, ShapeKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Inclusive bounds on bulk-create counts
pub const MAX_BULK_COUNT: usize = 500;

/// Inclusive per-side bound on explicit grids
pub const MAX_GRID_SIDE: usize = 50;

/// Bounds on numbered flowcharts
pub const FLOWCHART_STEPS: std::ops::RangeInclusive<usize> = 2..=20;

/// Default step count for `flowchart` without a number
pub const DEFAULT_FLOWCHART_STEPS: usize = 5;

/// What a deterministic recipe will build or change
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    /// Flowchart from explicit node labels (arrow-chain or numbered)
    Flowchart { labels: Vec<String> },
    /// Fixed reply, no board mutation
    Canned { reply: String },
    /// Delete every object on the board
    ClearBoard,
    /// Delete all objects of one kind
    DeleteByKind { kind: ObjectKind },
    /// Recolor all objects of one kind (None = stickies, shapes, text, frames)
    BulkRecolor {
        kind: Option<ObjectKind>,
        color: String,
    },
    /// Arrange existing objects into a grid
    ArrangeGrid,
    /// Create an RxC grid of stickies, optionally labeled per column
    GridCreate {
        rows: usize,
        cols: usize,
        labels: Vec<String>,
    },
    /// Create N objects in a row or column
    LineCreate {
        count: usize,
        kind: ObjectKind,
        horizontal: bool,
    },
    /// Create N objects on a square-ish grid
    BulkCreate { count: usize, kind: ObjectKind },
    /// Structural template
    Template(TemplateKind),
    /// Create one object
    SingleCreate {
        kind: SingleKind,
        color: Option<String>,
        label: Option<String>,
        at: Option<(f64, f64)>,
    },
}

/// Board templates reachable by keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Swot,
    Kanban,
    Retrospective,
    Eisenhower,
    MindMap,
    ProsCons,
    Timeline,
    UserJourney,
}

/// Kinds a single-object create can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleKind {
    Sticky,
    Shape(ShapeKind),
    Text,
    Frame,
}

/// Fixed color-name table
pub(crate) const COLORS: &[(&str, &str)] = &[
    ("red", "#F44336"),
    ("orange", "#FF9800"),
    ("yellow", "#FFEB3B"),
    ("green", "#4CAF50"),
    ("teal", "#009688"),
    ("cyan", "#00BCD4"),
    ("blue", "#2196F3"),
    ("purple", "#9C27B0"),
    ("pink", "#E91E63"),
    ("brown", "#795548"),
    ("black", "#212121"),
    ("white", "#FFFFFF"),
    ("gray", "#9E9E9E"),
    ("grey", "#9E9E9E"),
];

/// Resolve a color name to its hex value
#[must_use]
pub(crate) fn color_hex(name: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

/// Shape-word aliases (square -> rect, oval -> circle, plus -> cross, ...)
fn shape_word(word: &str) -> Option<ShapeKind> {
    match word {
        "rect" | "rectangle" | "square" | "box" => Some(ShapeKind::Rect),
        "circle" | "oval" | "ellipse" => Some(ShapeKind::Circle),
        "triangle" => Some(ShapeKind::Triangle),
        "diamond" | "rhombus" => Some(ShapeKind::Diamond),
        "star" => Some(ShapeKind::Star),
        "cross" | "plus" => Some(ShapeKind::Cross),
        "arrow" => Some(ShapeKind::Arrow),
        "hexagon" => Some(ShapeKind::Hexagon),
        _ => None,
    }
}

/// Words that mean the prompt needs free-form content the deterministic
/// path cannot synthesize
static CONTENT_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(about|with|for|titled|saying|containing|regarding|related|labeled|labelled|named|called)\b",
    )
    .unwrap()
});

/// True when a bulk-create prompt asks for content we cannot make up
#[must_use]
pub(crate) fn has_content_words(normalized: &str) -> bool {
    CONTENT_WORDS.is_match(normalized)
}

/// Guard shared by every counted matcher
#[must_use]
pub(crate) fn count_in_bounds(count: usize) -> bool {
    (1..=MAX_BULK_COUNT).contains(&count)
}

/// Guard for explicit RxC grids
#[must_use]
pub(crate) fn grid_in_bounds(rows: usize, cols: usize) -> bool {
    (1..=MAX_GRID_SIDE).contains(&rows)
        && (1..=MAX_GRID_SIDE).contains(&cols)
        && rows * cols <= MAX_BULK_COUNT
}

/// Classify a command into a deterministic recipe, or `None` for the
/// tool-calling loop
///
/// Calling twice on the same input returns structurally equal results.
#[must_use]
pub fn classify(text: &str) -> Option<Recipe> {
    let original = text.trim();
    if original.is_empty() {
        return None;
    }
    let normalized = original.to_lowercase();

    type Matcher = fn(&str, &str) -> Option<Recipe>;
    // Priority order is load-bearing: first match wins, later patterns
    // are never evaluated.
    const MATCHERS: &[Matcher] = &[
        match_arrow_chain,
        match_canned,
        match_clear_board,
        match_selective_delete,
        match_bulk_recolor,
        match_arrange_grid,
        match_explicit_grid,
        match_line_create,
        match_numbered_flowchart,
        match_bulk_create,
        match_template,
        match_single_create,
    ];

    MATCHERS
        .iter()
        .find_map(|matcher| matcher(&normalized, original))
}

// --- individual matchers -------------------------------------------------

static ARROW_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*(?:-{1,2}>|→)\s*").unwrap());

fn match_arrow_chain(normalized: &str, original: &str) -> Option<Recipe> {
    if !normalized.contains("->") && !normalized.contains('→') {
        return None;
    }
    let labels: Vec<String> = ARROW_SPLIT
        .split(original)
        .map(|s| s.trim().to_string())
        .collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.len() >= 100) {
        return None;
    }
    Some(Recipe::Flowchart { labels })
}

fn match_canned(normalized: &str, _original: &str) -> Option<Recipe> {
    let stripped = normalized.trim_end_matches(['?', '!', '.']);
    let reply = match stripped {
        "undo" => "Undo isn't wired through chat - use Ctrl+Z or the toolbar instead.",
        "redo" => "Redo isn't wired through chat - use Ctrl+Shift+Z or the toolbar instead.",
        "help" | "what can you do" => {
            "I can create stickies, shapes, text, frames and connectors, arrange or \
             recolor what's on the board, build templates (SWOT, kanban, retro, \
             timeline...), and draw flowcharts from `A -> B -> C` syntax."
        }
        _ => return None,
    };
    Some(Recipe::Canned {
        reply: reply.to_string(),
    })
}

static CLEAR_BOARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:clear|wipe|empty)\s+(?:the\s+)?(?:board|canvas|everything)|delete\s+everything|remove\s+(?:all\s+objects|everything)",
    )
    .unwrap()
});

fn match_clear_board(normalized: &str, _original: &str) -> Option<Recipe> {
    CLEAR_BOARD.is_match(normalized).then_some(Recipe::ClearBoard)
}

static SELECTIVE_DELETE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:delete|remove)\s+(?:all|every)\s+(?:the\s+)?([a-z][a-z -]*)").unwrap()
});

fn match_selective_delete(normalized: &str, _original: &str) -> Option<Recipe> {
    let caps = SELECTIVE_DELETE.captures(normalized)?;
    let kind = ObjectKind::from_word(caps.get(1)?.as_str())?;
    Some(Recipe::DeleteByKind { kind })
}

static BULK_RECOLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:color|colour|change|make|turn|paint)\s+(?:everything|all|every)\s*(?:the\s+)?(.*)$",
    )
    .unwrap()
});

fn match_bulk_recolor(normalized: &str, _original: &str) -> Option<Recipe> {
    let caps = BULK_RECOLOR.captures(normalized)?;
    let rest = caps.get(1)?.as_str();
    let words: Vec<&str> = rest.split_whitespace().collect();
    // Color is the last recognizable color word; the kind (optional) is
    // whatever precedes it.
    let (color_pos, hex) = words
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, w)| color_hex(w).map(|hex| (i, hex)))?;
    let kind = words[..color_pos]
        .iter()
        .find_map(|w| ObjectKind::from_word(w));
    Some(Recipe::BulkRecolor {
        kind,
        color: hex.to_string(),
    })
}

static ARRANGE_GRID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:arrange|organi[sz]e|lay\s*out|tidy)\b.*\bgrid\b").unwrap()
});

fn match_arrange_grid(normalized: &str, _original: &str) -> Option<Recipe> {
    ARRANGE_GRID.is_match(normalized).then_some(Recipe::ArrangeGrid)
}

static EXPLICIT_GRID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(?:x|×|by)\s*(\d+)\s*(?:grid|matrix)").unwrap()
});
static GRID_LABELS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfor\s+(.+)$").unwrap());

fn match_explicit_grid(normalized: &str, original: &str) -> Option<Recipe> {
    let caps = EXPLICIT_GRID.captures(normalized)?;
    let rows: usize = caps.get(1)?.as_str().parse().ok()?;
    let cols: usize = caps.get(2)?.as_str().parse().ok()?;
    if !grid_in_bounds(rows, cols) {
        return None;
    }
    // Optional trailing `for X and Y, Z` clause supplies column labels,
    // extracted from the original text to keep casing.
    let labels = GRID_LABELS
        .captures(original)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .split(|c| c == ',' || c == ';')
                .flat_map(|part| part.split(" and "))
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();
    Some(Recipe::GridCreate { rows, cols, labels })
}

static LINE_CREATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:create|add|make|generate|draw)\s+(\d+)\s+([a-z][a-z -]*?)\s+in\s+a\s+(row|column|line)",
    )
    .unwrap()
});

fn match_line_create(normalized: &str, _original: &str) -> Option<Recipe> {
    let caps = LINE_CREATE.captures(normalized)?;
    let count: usize = caps.get(1)?.as_str().parse().ok()?;
    if !count_in_bounds(count) {
        return None;
    }
    let kind = ObjectKind::from_word(caps.get(2)?.as_str())?;
    let horizontal = caps.get(3)?.as_str() != "column";
    Some(Recipe::LineCreate {
        count,
        kind,
        horizontal,
    })
}

static NUMBERED_FLOWCHART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"flow\s*chart(?:\s+with\s+(\d+)\s+steps?)?").unwrap());

fn match_numbered_flowchart(normalized: &str, _original: &str) -> Option<Recipe> {
    let caps = NUMBERED_FLOWCHART.captures(normalized)?;
    let steps = match caps.get(1) {
        Some(m) => m.as_str().parse().ok()?,
        None => DEFAULT_FLOWCHART_STEPS,
    };
    if !FLOWCHART_STEPS.contains(&steps) {
        return None;
    }
    let labels = (1..=steps).map(|i| format!("Step {i}")).collect();
    Some(Recipe::Flowchart { labels })
}

static BULK_CREATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:create|add|make|generate|place)\s+(\d+)\s+([a-z][a-z -]*)").unwrap()
});

fn match_bulk_create(normalized: &str, _original: &str) -> Option<Recipe> {
    let caps = BULK_CREATE.captures(normalized)?;
    // Prompts naming content need the reasoning path; a deterministic
    // bulk create would fill the board with empty duplicates.
    if has_content_words(normalized) {
        return None;
    }
    let count: usize = caps.get(1)?.as_str().parse().ok()?;
    if !count_in_bounds(count) {
        return None;
    }
    let kind = caps
        .get(2)?
        .as_str()
        .split_whitespace()
        .find_map(ObjectKind::from_word)?;
    Some(Recipe::BulkCreate { count, kind })
}

/// Template keyword table, checked in order
const TEMPLATE_WORDS: &[(&str, TemplateKind)] = &[
    ("swot", TemplateKind::Swot),
    ("kanban", TemplateKind::Kanban),
    ("sprint board", TemplateKind::Kanban),
    ("retrospective", TemplateKind::Retrospective),
    ("retro", TemplateKind::Retrospective),
    ("eisenhower", TemplateKind::Eisenhower),
    ("priority matrix", TemplateKind::Eisenhower),
    ("urgent important", TemplateKind::Eisenhower),
    ("mind map", TemplateKind::MindMap),
    ("mindmap", TemplateKind::MindMap),
    ("mind-map", TemplateKind::MindMap),
    ("pros and cons", TemplateKind::ProsCons),
    ("pros/cons", TemplateKind::ProsCons),
    ("timeline", TemplateKind::Timeline),
    ("user journey", TemplateKind::UserJourney),
];

fn match_template(normalized: &str, _original: &str) -> Option<Recipe> {
    TEMPLATE_WORDS
        .iter()
        .find(|(word, _)| normalized.contains(word))
        .map(|(_, kind)| Recipe::Template(*kind))
}

static SINGLE_CREATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:add|create|make|draw|insert)\s+(?:a|an|one)?\s*(?:([a-z]+)\s+)?([a-z][a-z-]*(?:\s+note)?)")
        .unwrap()
});
static NAMED_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:called|titled|named|saying|that\s+says|labell?ed)\s+"?([^"]+?)"?\s*$"#)
        .unwrap()
});
static QUOTED_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());
static AT_COORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"at\s+(?:position\s+)?\(?\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\)?")
        .unwrap()
});

fn single_kind_word(word: &str) -> Option<SingleKind> {
    let w = word.trim();
    if let Some(shape) = shape_word(w) {
        return Some(SingleKind::Shape(shape));
    }
    match w {
        "sticky" | "sticky note" | "note" | "postit" | "post-it" | "stickynote" => {
            Some(SingleKind::Sticky)
        }
        "text" | "label" | "heading" | "title" => Some(SingleKind::Text),
        "frame" | "section" => Some(SingleKind::Frame),
        _ => None,
    }
}

fn match_single_create(normalized: &str, original: &str) -> Option<Recipe> {
    let caps = SINGLE_CREATE.captures(normalized)?;
    let adjective = caps.get(1).map(|m| m.as_str());
    let noun = caps.get(2)?.as_str();

    // `create a red circle`: adjective slot holds the color. `create a
    // circle`: the noun lands in whichever slot the regex filled.
    let (color, kind) = match (adjective, single_kind_word(noun)) {
        (Some(adj), Some(kind)) => (color_hex(adj).map(str::to_string), kind),
        (Some(adj), None) => (None, single_kind_word(adj)?),
        (None, Some(kind)) => (None, kind),
        (None, None) => return None,
    };

    let label = NAMED_LABEL
        .captures(original)
        .or_else(|| QUOTED_LABEL.captures(original))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string());
    let at = AT_COORDS.captures(normalized).and_then(|c| {
        let x: f64 = c.get(1)?.as_str().parse().ok()?;
        let y: f64 = c.get(2)?.as_str().parse().ok()?;
        Some((x, y))
    });

    Some(Recipe::SingleCreate {
        kind,
        color,
        label,
        at,
    })
}
