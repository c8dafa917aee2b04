//! Compacted board snapshots
//!
//! The reasoning service never sees raw documents. It gets a compact
//! one-line-per-object rendering, capped, with text truncated - enough
//! to reference objects by id without paying for the full state.

use boardflow_types::{BoardObject, ObjectId};
use once_cell::sync::Lazy;
use regex::Regex;

/// Longest text excerpt included per object
const TEXT_EXCERPT: usize = 40;

/// Render objects as one line each, newest last, capped at `cap`
#[must_use]
pub fn compact_snapshot(objects: &[BoardObject], cap: usize) -> String {
    if objects.is_empty() {
        return "The board is empty.".to_string();
    }
    let mut sorted: Vec<&BoardObject> = objects.iter().collect();
    sorted.sort_by_key(|o| o.updated_at);

    let shown = sorted.len().min(cap);
    let mut out = String::with_capacity(shown * 64);
    out.push_str(&format!("{} objects on the board:\n", sorted.len()));
    for object in &sorted[..shown] {
        out.push_str(&render_line(object));
        out.push('\n');
    }
    if sorted.len() > shown {
        out.push_str(&format!("(+{} more not shown)\n", sorted.len() - shown));
    }
    out
}

fn render_line(object: &BoardObject) -> String {
    let mut line = format!(
        "[{}] {} @({:.0},{:.0}) {:.0}x{:.0}",
        object.id,
        object.kind(),
        object.x,
        object.y,
        object.width,
        object.height
    );
    if let Some(text) = object.body.text() {
        if !text.is_empty() {
            let excerpt: String = text.chars().take(TEXT_EXCERPT).collect();
            let ellipsis = if text.chars().count() > TEXT_EXCERPT {
                "…"
            } else {
                ""
            };
            line.push_str(&format!(" \"{excerpt}{ellipsis}\""));
        }
    }
    if let Some(parent) = &object.parent_id {
        line.push_str(&format!(" parent={parent}"));
    }
    line
}

/// Keywords suggesting the prompt references objects already on the board
static REFERENCE_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(move|delete|remove|change|update|rename|recolor|resize|rotate|arrange|organi[sz]e|align|distribute|tidy|connect|duplicate|copy|what|which|where|how\s+many|count|summari[sz]e|describe|selected|selection|these|those|them|this|that|it|existing|current)\b",
    )
    .unwrap()
});

/// Should the Reason state include a board snapshot?
///
/// Pure-creation prompts skip it to save cost; anything that smells like
/// it references existing objects, or any non-empty selection, includes it.
#[must_use]
pub fn references_existing(prompt: &str, selection: &[ObjectId]) -> bool {
    !selection.is_empty() || REFERENCE_WORDS.is_match(&prompt.to_lowercase())
}
