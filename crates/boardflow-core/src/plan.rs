//! Plan executor
//!
//! Executes an ordered list of typed create operations as one logical
//! mutation. The phases run in a fixed total order - identity
//! allocation, external-lookup resolution, payload building,
//! auto-parenting, commit - because forward references only resolve
//! correctly under that order.
//!
//! `tempId` is plan-scoped: every op gets a real id up front and all
//! references to a tempId are rewritten before any write. A tempId never
//! reaches storage.

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::images::ImageSearch;
use boardflow_store::{commit_chunked, BatchOp, DocumentStore};
use boardflow_types::{
    frame_interior, BoardId, BoardObject, ObjectBody, ObjectId, Rect, ShapeKind,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use ulid::Ulid;

/// Default colors applied when an op names none
pub(crate) const DEFAULT_STICKY_COLOR: &str = "#FFEB3B";
pub(crate) const DEFAULT_SHAPE_COLOR: &str = "#2196F3";
pub(crate) const DEFAULT_TEXT_COLOR: &str = "#212121";
pub(crate) const DEFAULT_FRAME_COLOR: &str = "#F5F5F5";
pub(crate) const DEFAULT_CONNECTOR_COLOR: &str = "#9E9E9E";
const DEFAULT_FONT_SIZE: f64 = 18.0;

/// Margin between the viewport edge and the fallback placement grid
const FALLBACK_GRID_MARGIN: f64 = 60.0;

/// One operation inside a plan
///
/// Geometry and relationship fields are shared across variants; `spec`
/// carries the variant payload. `parent_id`, `from_id` and `to_id` may
/// name either a real object id or another op's `temp_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Numeric group tag; ops sharing a tag share an `ai_group_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<u32>,
    /// Human-readable label for the group; first seen per tag wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(flatten)]
    pub spec: OpSpec,
}

/// Variant payload of a plan op, tagged with `op`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum OpSpec {
    #[serde(rename_all = "camelCase")]
    Sticky {
        text: Option<String>,
        color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Shape {
        shape: Option<ShapeKind>,
        color: Option<String>,
        text: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Frame {
        title: Option<String>,
        borderless: Option<bool>,
        color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        text: Option<String>,
        font_size: Option<f64>,
        color: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Sticker {
        query: Option<String>,
        emoji: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Connector {
        from_id: Option<String>,
        to_id: Option<String>,
        start_arrow: Option<bool>,
        end_arrow: Option<bool>,
        label: Option<String>,
        color: Option<String>,
    },
}

impl PlanOp {
    fn from_spec(spec: OpSpec) -> Self {
        Self {
            temp_id: None,
            x: None,
            y: None,
            width: None,
            height: None,
            parent_id: None,
            group: None,
            group_label: None,
            spec,
        }
    }

    /// Sticky note op
    #[must_use]
    pub fn sticky(text: impl Into<String>) -> Self {
        Self::from_spec(OpSpec::Sticky {
            text: Some(text.into()),
            color: None,
        })
    }

    /// Shape op
    #[must_use]
    pub fn shape(shape: ShapeKind, text: impl Into<String>) -> Self {
        Self::from_spec(OpSpec::Shape {
            shape: Some(shape),
            color: None,
            text: Some(text.into()),
        })
    }

    /// Frame op
    #[must_use]
    pub fn frame(title: impl Into<String>) -> Self {
        Self::from_spec(OpSpec::Frame {
            title: Some(title.into()),
            borderless: None,
            color: None,
        })
    }

    /// Text op
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::from_spec(OpSpec::Text {
            text: Some(text.into()),
            font_size: None,
            color: None,
        })
    }

    /// Image-backed sticker op
    #[must_use]
    pub fn sticker_query(query: impl Into<String>) -> Self {
        Self::from_spec(OpSpec::Sticker {
            query: Some(query.into()),
            emoji: None,
        })
    }

    /// Connector op with a default end arrow
    #[must_use]
    pub fn connector(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::from_spec(OpSpec::Connector {
            from_id: Some(from.into()),
            to_id: Some(to.into()),
            start_arrow: None,
            end_arrow: None,
            label: None,
            color: None,
        })
    }

    /// With a plan-scoped temp id other ops can reference
    #[inline]
    #[must_use]
    pub fn with_temp(mut self, temp_id: impl Into<String>) -> Self {
        self.temp_id = Some(temp_id.into());
        self
    }

    /// With an explicit position
    #[inline]
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// With an explicit size
    #[inline]
    #[must_use]
    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// With an explicit parent (real id or temp id)
    #[inline]
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// With a group tag and label
    #[inline]
    #[must_use]
    pub fn with_group(mut self, tag: u32, label: impl Into<String>) -> Self {
        self.group = Some(tag);
        self.group_label = Some(label.into());
        self
    }

    /// With a color, where the variant has one
    #[must_use]
    pub fn with_color(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        match &mut self.spec {
            OpSpec::Sticky { color, .. }
            | OpSpec::Shape { color, .. }
            | OpSpec::Frame { color, .. }
            | OpSpec::Text { color, .. }
            | OpSpec::Connector { color, .. } => *color = Some(value),
            OpSpec::Sticker { .. } => {}
        }
        self
    }

    fn is_connector(&self) -> bool {
        matches!(self.spec, OpSpec::Connector { .. })
    }

    fn is_frame(&self) -> bool {
        matches!(self.spec, OpSpec::Frame { .. })
    }
}

/// Result of a plan: created ids plus success-with-notes partial failures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOutcome {
    pub created: Vec<ObjectId>,
    pub partial_failures: Vec<String>,
}

/// Executes plans against the document store
#[derive(Clone)]
pub struct PlanExecutor {
    store: Arc<dyn DocumentStore>,
    images: Option<Arc<dyn ImageSearch>>,
    config: AgentConfig,
}

impl PlanExecutor {
    /// New executor without image search
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: AgentConfig) -> Self {
        Self {
            store,
            images: None,
            config,
        }
    }

    /// With an image-search collaborator for GIF-backed stickers
    #[must_use]
    pub fn with_images(mut self, images: Arc<dyn ImageSearch>) -> Self {
        self.images = Some(images);
        self
    }

    /// Execute one plan atomically (chunked above the store's batch cap)
    ///
    /// A failing external lookup skips only its op and is reported as a
    /// partial-failure note; it never aborts the plan.
    pub async fn execute(
        &self,
        board: &BoardId,
        actor: &str,
        ops: Vec<PlanOp>,
        viewport: Option<Rect>,
        label: Option<&str>,
    ) -> Result<PlanOutcome, AgentError> {
        if ops.is_empty() {
            return Ok(PlanOutcome::default());
        }
        tracing::debug!(ops = ops.len(), board = %board, "executing plan");

        // Phase 1: pre-allocate a real identity for every op. This is what
        // makes forward references possible.
        let ids: Vec<ObjectId> = ops.iter().map(|_| self.store.allocate_id()).collect();
        let temp_map: HashMap<&str, &ObjectId> = ops
            .iter()
            .zip(&ids)
            .filter_map(|(op, id)| op.temp_id.as_deref().map(|t| (t, id)))
            .collect();

        // Phase 2: resolve external side effects concurrently, isolated.
        let mut partial_failures = Vec::new();
        let mut skipped: HashSet<usize> = HashSet::new();
        let mut sticker_urls: HashMap<usize, String> = HashMap::new();
        self.resolve_stickers(&ops, &mut sticker_urls, &mut skipped, &mut partial_failures)
            .await;

        // Phase 3: build payloads, rewriting temp references and
        // auto-positioning coordinate-less ops on the fallback grid.
        let viewport = viewport.unwrap_or(self.config.default_viewport);
        let plan_tag = Ulid::new().to_string().to_lowercase();
        let mut group_labels: HashMap<u32, String> = HashMap::new();
        let mut fallback_slot = 0usize;
        let mut built: Vec<BoardObject> = Vec::with_capacity(ops.len());
        let mut built_order: Vec<usize> = Vec::with_capacity(ops.len());

        for (i, op) in ops.iter().enumerate() {
            if skipped.contains(&i) {
                continue;
            }
            let resolve = |reference: &str| -> ObjectId {
                temp_map
                    .get(reference)
                    .map(|id| (*id).clone())
                    .unwrap_or_else(|| ObjectId::new(reference))
            };

            let body = match &op.spec {
                OpSpec::Sticky { text, color } => ObjectBody::Sticky {
                    text: text.clone().unwrap_or_default(),
                    color: color.clone().unwrap_or_else(|| DEFAULT_STICKY_COLOR.into()),
                },
                OpSpec::Shape { shape, color, text } => ObjectBody::Shape {
                    shape: shape.unwrap_or(ShapeKind::Rect),
                    color: color.clone().unwrap_or_else(|| DEFAULT_SHAPE_COLOR.into()),
                    text: text.clone().unwrap_or_default(),
                },
                OpSpec::Frame {
                    title,
                    borderless,
                    color,
                } => ObjectBody::Frame {
                    title: title.clone().unwrap_or_default(),
                    borderless: borderless.unwrap_or(false),
                    color: color.clone().unwrap_or_else(|| DEFAULT_FRAME_COLOR.into()),
                },
                OpSpec::Text {
                    text,
                    font_size,
                    color,
                } => ObjectBody::Text {
                    text: text.clone().unwrap_or_default(),
                    font_size: font_size.unwrap_or(DEFAULT_FONT_SIZE),
                    color: color.clone().unwrap_or_else(|| DEFAULT_TEXT_COLOR.into()),
                },
                OpSpec::Sticker { query, emoji } => ObjectBody::Sticker {
                    emoji: emoji.clone(),
                    query: query.clone(),
                    image_url: sticker_urls.get(&i).cloned(),
                },
                OpSpec::Connector {
                    from_id,
                    to_id,
                    start_arrow,
                    end_arrow,
                    label,
                    color,
                } => ObjectBody::Connector {
                    from_id: from_id.as_deref().map(resolve),
                    to_id: to_id.as_deref().map(resolve),
                    start_arrow: start_arrow.unwrap_or(false),
                    end_arrow: end_arrow.unwrap_or(true),
                    label: label.clone(),
                    color: color.clone().unwrap_or_else(|| DEFAULT_CONNECTOR_COLOR.into()),
                },
            };

            let mut object = BoardObject::new(ids[i].clone(), body, actor);
            if let (Some(w), Some(h)) = (op.width, op.height) {
                object = object.with_size(w, h);
            }
            match (op.x, op.y) {
                (Some(x), Some(y)) => object = object.with_position(x, y),
                _ if op.is_connector() => {}
                _ => {
                    let (x, y) = self.fallback_position(&viewport, fallback_slot);
                    fallback_slot += 1;
                    object = object.with_position(x, y);
                }
            }
            if let Some(parent) = &op.parent_id {
                object = object.with_parent(resolve(parent));
            }

            let group_id = match op.group {
                Some(tag) => {
                    let label = group_labels.entry(tag).or_insert_with(|| {
                        op.group_label
                            .clone()
                            .unwrap_or_else(|| format!("group-{tag}"))
                    });
                    format!("{label}-{plan_tag}")
                }
                None => plan_tag.clone(),
            };
            object = object.with_group(group_id);
            if let Some(label) = label {
                object = object.with_label(label);
            }

            built.push(object);
            built_order.push(i);
        }

        // Phase 4: auto-parent children against plan frames, first
        // containing frame in op order wins.
        auto_parent(&mut built);

        // Phase 5: commit, chunked at the store cap. Only each chunk is
        // atomic; a mid-plan failure leaves earlier chunks applied.
        let created: Vec<ObjectId> = built.iter().map(|o| o.id.clone()).collect();
        let batch: Vec<BatchOp> = built.into_iter().map(BatchOp::Set).collect();
        let batches = commit_chunked(self.store.as_ref(), board, batch).await?;
        tracing::info!(
            created = created.len(),
            batches,
            skipped = partial_failures.len(),
            "plan committed"
        );

        Ok(PlanOutcome {
            created,
            partial_failures,
        })
    }

    /// Resolve image-backed stickers concurrently, each isolated
    async fn resolve_stickers(
        &self,
        ops: &[PlanOp],
        sticker_urls: &mut HashMap<usize, String>,
        skipped: &mut HashSet<usize>,
        partial_failures: &mut Vec<String>,
    ) {
        let pending: Vec<(usize, &str)> = ops
            .iter()
            .enumerate()
            .filter_map(|(i, op)| match &op.spec {
                OpSpec::Sticker {
                    query: Some(q),
                    emoji: None,
                } => Some((i, q.as_str())),
                _ => None,
            })
            .collect();
        if pending.is_empty() {
            return;
        }

        let Some(images) = &self.images else {
            for (i, query) in pending {
                skipped.insert(i);
                partial_failures.push(format!("sticker \"{query}\": image search unavailable"));
            }
            return;
        };

        let lookups = pending.iter().map(|(_, query)| images.search(query, 1));
        let results = futures::future::join_all(lookups).await;
        for ((i, query), result) in pending.into_iter().zip(results) {
            match result {
                Ok(hits) if !hits.is_empty() => {
                    sticker_urls.insert(i, hits[0].url.clone());
                }
                Ok(_) => {
                    skipped.insert(i);
                    partial_failures.push(format!("sticker \"{query}\": no results"));
                }
                Err(err) => {
                    tracing::warn!(query, %err, "sticker lookup failed");
                    skipped.insert(i);
                    partial_failures.push(format!("sticker \"{query}\": {err}"));
                }
            }
        }
    }

    /// Fixed-size fallback grid inside the viewport
    fn fallback_position(&self, viewport: &Rect, slot: usize) -> (f64, f64) {
        let cell = self.config.fallback_cell;
        let usable = (viewport.width - FALLBACK_GRID_MARGIN * 2.0).max(cell);
        let columns = ((usable / cell).floor() as usize).max(1);
        let (row, col) = (slot / columns, slot % columns);
        (
            viewport.x + FALLBACK_GRID_MARGIN + col as f64 * cell,
            viewport.y + FALLBACK_GRID_MARGIN + row as f64 * cell,
        )
    }
}

/// Assign the first containing plan frame (op order) to parentless,
/// parentable payloads
fn auto_parent(built: &mut [BoardObject]) {
    let frames: Vec<(ObjectId, Rect)> = built
        .iter()
        .filter_map(|o| match &o.body {
            ObjectBody::Frame { borderless, .. } => {
                Some((o.id.clone(), frame_interior(&o.bounds(), *borderless)))
            }
            _ => None,
        })
        .collect();
    if frames.is_empty() {
        return;
    }
    for object in built.iter_mut() {
        if object.parent_id.is_some() || !object.can_have_parent() {
            continue;
        }
        let bounds = object.bounds();
        if let Some((frame_id, _)) = frames
            .iter()
            .find(|(id, interior)| *id != object.id && interior.contains_rect(&bounds))
        {
            object.parent_id = Some(frame_id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImageHit;
    use async_trait::async_trait;
    use boardflow_store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn executor(store: &Arc<MemoryStore>) -> PlanExecutor {
        PlanExecutor::new(store.clone(), AgentConfig::default())
    }

    fn board() -> BoardId {
        BoardId::from("b1")
    }

    #[tokio::test]
    async fn forward_references_resolve_to_real_ids() {
        let store = Arc::new(MemoryStore::new());
        let outcome = executor(&store)
            .execute(
                &board(),
                "tester",
                vec![
                    PlanOp::frame("Ideas").with_temp("f1").at(0.0, 0.0).sized(600.0, 400.0),
                    PlanOp::sticky("inside").with_parent("f1").at(100.0, 100.0),
                ],
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 2);
        let objects = store.scan(&board()).await.unwrap();
        let frame = objects.iter().find(|o| o.kind() == boardflow_types::ObjectKind::Frame).unwrap();
        let sticky = objects.iter().find(|o| o.kind() == boardflow_types::ObjectKind::Sticky).unwrap();
        assert_eq!(sticky.parent_id.as_ref(), Some(&frame.id));
        // The literal temp id never reaches storage.
        for object in &objects {
            let json = serde_json::to_string(object).unwrap();
            assert!(!json.contains("\"f1\""), "tempId leaked: {json}");
        }
    }

    #[tokio::test]
    async fn connector_endpoints_resolve_forward() {
        let store = Arc::new(MemoryStore::new());
        executor(&store)
            .execute(
                &board(),
                "tester",
                vec![
                    PlanOp::sticky("a").with_temp("n1").at(0.0, 0.0),
                    PlanOp::sticky("b").with_temp("n2").at(300.0, 0.0),
                    PlanOp::connector("n1", "n2"),
                ],
                None,
                None,
            )
            .await
            .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let connector = objects
            .iter()
            .find_map(|o| match &o.body {
                ObjectBody::Connector {
                    from_id: Some(f),
                    to_id: Some(t),
                    start_arrow,
                    end_arrow,
                    ..
                } => Some((f.clone(), t.clone(), *start_arrow, *end_arrow)),
                _ => None,
            })
            .unwrap();
        let real_ids: Vec<&ObjectId> = objects.iter().map(|o| &o.id).collect();
        assert!(real_ids.contains(&&connector.0));
        assert!(real_ids.contains(&&connector.1));
        assert!(!connector.2, "start arrow defaults off");
        assert!(connector.3, "end arrow defaults on");
    }

    #[tokio::test]
    async fn auto_parent_requires_full_containment() {
        let store = Arc::new(MemoryStore::new());
        executor(&store)
            .execute(
                &board(),
                "tester",
                vec![
                    PlanOp::frame("F").with_temp("f").at(0.0, 0.0).sized(600.0, 400.0),
                    PlanOp::sticky("inside").at(200.0, 100.0).sized(100.0, 100.0),
                    PlanOp::sticky("straddling").at(550.0, 100.0).sized(100.0, 100.0),
                ],
                None,
                None,
            )
            .await
            .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let by_text = |needle: &str| {
            objects
                .iter()
                .find(|o| o.body.text() == Some(needle))
                .unwrap()
        };
        assert!(by_text("inside").parent_id.is_some());
        assert_eq!(by_text("straddling").parent_id, None);
    }

    #[tokio::test]
    async fn explicit_parent_beats_auto_parenting() {
        let store = Arc::new(MemoryStore::new());
        executor(&store)
            .execute(
                &board(),
                "tester",
                vec![
                    PlanOp::frame("A").with_temp("fa").at(0.0, 0.0).sized(600.0, 400.0),
                    PlanOp::frame("B").with_temp("fb").at(1000.0, 0.0).sized(600.0, 400.0),
                    // Contained in A, but explicitly parented to B.
                    PlanOp::sticky("s").with_parent("fb").at(200.0, 100.0).sized(100.0, 100.0),
                ],
                None,
                None,
            )
            .await
            .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let frame_b = objects
            .iter()
            .find(|o| o.body.text() == Some("B"))
            .unwrap();
        let sticky = objects
            .iter()
            .find(|o| o.body.text() == Some("s"))
            .unwrap();
        assert_eq!(sticky.parent_id.as_ref(), Some(&frame_b.id));
    }

    #[tokio::test]
    async fn group_tags_resolve_first_seen_label() {
        let store = Arc::new(MemoryStore::new());
        executor(&store)
            .execute(
                &board(),
                "tester",
                vec![
                    PlanOp::sticky("a").at(0.0, 0.0).with_group(7, "Ideas"),
                    PlanOp::sticky("b").at(300.0, 0.0).with_group(7, "Renamed"),
                    PlanOp::sticky("c").at(600.0, 0.0).with_group(9, "Risks"),
                ],
                None,
                None,
            )
            .await
            .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let group_of = |needle: &str| {
            objects
                .iter()
                .find(|o| o.body.text() == Some(needle))
                .and_then(|o| o.ai_group_id.clone())
                .unwrap()
        };
        assert_eq!(group_of("a"), group_of("b"));
        assert!(group_of("a").starts_with("Ideas-"));
        assert!(group_of("c").starts_with("Risks-"));
        assert_ne!(group_of("a"), group_of("c"));
    }

    #[tokio::test]
    async fn coordinate_less_ops_get_distinct_fallback_positions() {
        let store = Arc::new(MemoryStore::new());
        executor(&store)
            .execute(
                &board(),
                "tester",
                (0..12).map(|i| PlanOp::sticky(format!("n{i}"))).collect(),
                Some(Rect::new(0.0, 0.0, 1200.0, 800.0)),
                None,
            )
            .await
            .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let mut positions: Vec<(i64, i64)> = objects
            .iter()
            .map(|o| (o.x as i64, o.y as i64))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 12, "positions must be distinct");
    }

    struct NoHits;

    #[async_trait]
    impl ImageSearch for NoHits {
        async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<ImageHit>, AgentError> {
            Err(AgentError::External("search backend down".to_string()))
        }
    }

    #[tokio::test]
    async fn sticker_failures_are_isolated() {
        let store = Arc::new(MemoryStore::new());
        let outcome = PlanExecutor::new(store.clone(), AgentConfig::default())
            .with_images(Arc::new(NoHits))
            .execute(
                &board(),
                "tester",
                vec![
                    PlanOp::sticky("kept").at(0.0, 0.0),
                    PlanOp::sticker_query("party parrot"),
                    PlanOp::sticky("also kept").at(300.0, 0.0),
                ],
                None,
                None,
            )
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 2);
        assert_eq!(outcome.partial_failures.len(), 1);
        assert!(outcome.partial_failures[0].contains("party parrot"));
        assert_eq!(store.scan(&board()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn large_plans_chunk_into_multiple_commits() {
        let store = Arc::new(MemoryStore::new());
        let ops: Vec<PlanOp> = (0..500)
            .map(|i| PlanOp::sticky(format!("n{i}")).at((i % 25) as f64 * 200.0, (i / 25) as f64 * 200.0))
            .collect();
        let outcome = executor(&store)
            .execute(&board(), "tester", ops, None, None)
            .await
            .unwrap();

        assert_eq!(outcome.created.len(), 500);
        assert_eq!(store.commit_count(), 2);
    }
}
