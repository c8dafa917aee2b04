//! Deterministic recipe execution
//!
//! Recipes bypass the reasoning service entirely: classification already
//! decided what to build, so execution is a straight-line function of the
//! recipe. Everything bottoms out in the same [`PlanExecutor`] and
//! mutation helpers the tool loop uses.

use crate::classify::{Recipe, SingleKind, TemplateKind};
use crate::error::AgentError;
use crate::mutate::cascade_delete;
use crate::plan::{OpSpec, PlanOp};
use crate::tools::ToolContext;
use boardflow_layout::{run_layout, LayoutItem, LayoutMode, LayoutParams};
use boardflow_store::{commit_chunked, BatchOp, ObjectPatch};
use boardflow_types::{BoardObject, ObjectKind, ShapeKind};
use std::collections::HashSet;

/// Gap between the viewport edge and recipe-built content
const RECIPE_MARGIN: f64 = 60.0;

/// Node fill for generated flowcharts
const FLOWCHART_NODE_COLOR: &str = "#BBDEFB";
const FLOWCHART_NODE_WIDTH: f64 = 200.0;
const FLOWCHART_NODE_HEIGHT: f64 = 100.0;
const FLOWCHART_GAP: f64 = 80.0;

/// Execute a classified recipe and return the user-facing reply
pub(crate) async fn run_recipe(ctx: &ToolContext, recipe: Recipe) -> Result<String, AgentError> {
    match recipe {
        Recipe::Canned { reply } => Ok(reply),
        Recipe::ClearBoard => clear_board(ctx).await,
        Recipe::DeleteByKind { kind } => delete_by_kind(ctx, kind).await,
        Recipe::BulkRecolor { kind, color } => bulk_recolor(ctx, kind, &color).await,
        Recipe::ArrangeGrid => arrange_grid(ctx).await,
        Recipe::Flowchart { labels } => flowchart(ctx, &labels).await,
        Recipe::GridCreate { rows, cols, labels } => grid_create(ctx, rows, cols, &labels).await,
        Recipe::LineCreate {
            count,
            kind,
            horizontal,
        } => line_create(ctx, count, kind, horizontal).await,
        Recipe::BulkCreate { count, kind } => bulk_create(ctx, count, kind).await,
        Recipe::Template(kind) => template(ctx, kind).await,
        Recipe::SingleCreate {
            kind,
            color,
            label,
            at,
        } => single_create(ctx, kind, color, label, at).await,
    }
}

// --- mutations of existing objects ---------------------------------------

async fn clear_board(ctx: &ToolContext) -> Result<String, AgentError> {
    let objects = ctx.store.scan(&ctx.board).await?;
    if objects.is_empty() {
        return Ok("The board is already empty.".to_string());
    }
    let count = objects.len();
    let ops: Vec<BatchOp> = objects
        .into_iter()
        .map(|o| BatchOp::Delete(o.id))
        .collect();
    commit_chunked(ctx.store.as_ref(), &ctx.board, ops).await?;
    Ok(format!("Cleared the board ({count} objects removed)."))
}

async fn delete_by_kind(ctx: &ToolContext, kind: ObjectKind) -> Result<String, AgentError> {
    let objects = ctx.store.scan(&ctx.board).await?;
    let targets: HashSet<_> = objects
        .iter()
        .filter(|o| o.kind() == kind)
        .map(|o| o.id.clone())
        .collect();
    if targets.is_empty() {
        return Ok(format!("No {kind} objects to delete."));
    }
    let count = targets.len();
    let ops = cascade_delete(&objects, &targets);
    commit_chunked(ctx.store.as_ref(), &ctx.board, ops).await?;
    Ok(format!("Deleted {count} {kind} object(s)."))
}

async fn bulk_recolor(
    ctx: &ToolContext,
    kind: Option<ObjectKind>,
    color: &str,
) -> Result<String, AgentError> {
    // Without a named kind, recolor everything that carries a fill;
    // stickers and connectors keep their appearance.
    let wanted = |k: ObjectKind| match kind {
        Some(only) => k == only,
        None => matches!(
            k,
            ObjectKind::Sticky | ObjectKind::Shape | ObjectKind::Text | ObjectKind::Frame
        ),
    };
    let objects = ctx.store.scan(&ctx.board).await?;
    let ops: Vec<BatchOp> = objects
        .iter()
        .filter(|o| wanted(o.kind()))
        .map(|o| BatchOp::Update(o.id.clone(), ObjectPatch::new().colored(color)))
        .collect();
    if ops.is_empty() {
        return Ok("Nothing on the board matched that.".to_string());
    }
    let count = ops.len();
    commit_chunked(ctx.store.as_ref(), &ctx.board, ops).await?;
    Ok(format!("Recolored {count} object(s)."))
}

async fn arrange_grid(ctx: &ToolContext) -> Result<String, AgentError> {
    let objects = ctx.store.scan(&ctx.board).await?;
    let movable: Vec<&BoardObject> = objects
        .iter()
        .filter(|o| !matches!(o.kind(), ObjectKind::Connector | ObjectKind::Frame))
        .collect();
    if movable.is_empty() {
        return Ok("Nothing on the board to arrange.".to_string());
    }

    let items: Vec<LayoutItem> = movable
        .iter()
        .map(|o| LayoutItem::new(o.id.clone(), o.x, o.y, o.width, o.height))
        .collect();
    let columns = (items.len() as f64).sqrt().ceil() as usize;
    let min_x = movable.iter().map(|o| o.x).fold(f64::INFINITY, f64::min);
    let min_y = movable.iter().map(|o| o.y).fold(f64::INFINITY, f64::min);
    let params = LayoutParams::default()
        .with_spacing(ctx.config.spacing)
        .with_origin(min_x, min_y);

    let placements = run_layout(&items, LayoutMode::Grid { columns }, &params)?;
    let count = placements.len();
    let ops: Vec<BatchOp> = placements
        .into_iter()
        .map(|p| BatchOp::Update(p.id, ObjectPatch::new().at(p.x, p.y)))
        .collect();
    commit_chunked(ctx.store.as_ref(), &ctx.board, ops).await?;
    Ok(format!("Arranged {count} object(s) into a grid."))
}

// --- creation recipes -----------------------------------------------------

fn origin(ctx: &ToolContext) -> (f64, f64) {
    let viewport = ctx.viewport.unwrap_or(ctx.config.default_viewport);
    (viewport.x + RECIPE_MARGIN, viewport.y + RECIPE_MARGIN)
}

async fn run_plan(ctx: &ToolContext, ops: Vec<PlanOp>) -> Result<usize, AgentError> {
    let outcome = ctx
        .plans
        .execute(
            &ctx.board,
            &ctx.actor,
            ops,
            ctx.viewport,
            Some(&ctx.prompt_label),
        )
        .await?;
    Ok(outcome.created.len())
}

/// Blank create op and footprint for a creatable kind
///
/// "Arrows" classify as connectors but a point-to-point connector needs
/// endpoints, so counted creates render them as arrow shapes instead.
fn blank_op(kind: ObjectKind) -> (PlanOp, f64, f64) {
    match kind {
        ObjectKind::Sticky => (PlanOp::sticky(""), 180.0, 180.0),
        ObjectKind::Shape => (PlanOp::shape(ShapeKind::Rect, ""), 160.0, 120.0),
        ObjectKind::Frame => (PlanOp::frame(""), 400.0, 300.0),
        ObjectKind::Text => (PlanOp::text(""), 220.0, 40.0),
        ObjectKind::Sticker => (
            PlanOp {
                spec: OpSpec::Sticker {
                    query: None,
                    emoji: Some("⭐".to_string()),
                },
                ..PlanOp::sticky("")
            },
            120.0,
            120.0,
        ),
        ObjectKind::Connector => (PlanOp::shape(ShapeKind::Arrow, ""), 160.0, 120.0),
    }
}

async fn flowchart(ctx: &ToolContext, labels: &[String]) -> Result<String, AgentError> {
    let (ox, oy) = origin(ctx);
    let mut ops: Vec<PlanOp> = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        ops.push(
            PlanOp::shape(ShapeKind::Rect, label.clone())
                .with_temp(format!("n{i}"))
                .with_color(FLOWCHART_NODE_COLOR)
                .at(ox + i as f64 * (FLOWCHART_NODE_WIDTH + FLOWCHART_GAP), oy)
                .sized(FLOWCHART_NODE_WIDTH, FLOWCHART_NODE_HEIGHT),
        );
    }
    for i in 1..labels.len() {
        ops.push(PlanOp::connector(format!("n{}", i - 1), format!("n{i}")));
    }
    run_plan(ctx, ops).await?;
    Ok(format!("Built a flowchart with {} steps.", labels.len()))
}

async fn grid_create(
    ctx: &ToolContext,
    rows: usize,
    cols: usize,
    labels: &[String],
) -> Result<String, AgentError> {
    let (ox, oy) = origin(ctx);
    let cell = 180.0 + ctx.config.spacing;
    let mut ops = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            // Column labels land on the first row; everything else is blank.
            let text = if row == 0 {
                labels.get(col).cloned().unwrap_or_default()
            } else {
                String::new()
            };
            ops.push(
                PlanOp::sticky(text)
                    .at(ox + col as f64 * cell, oy + row as f64 * cell)
                    .sized(180.0, 180.0),
            );
        }
    }
    let created = run_plan(ctx, ops).await?;
    Ok(format!("Created a {rows}x{cols} grid ({created} stickies)."))
}

async fn line_create(
    ctx: &ToolContext,
    count: usize,
    kind: ObjectKind,
    horizontal: bool,
) -> Result<String, AgentError> {
    let (ox, oy) = origin(ctx);
    let ops: Vec<PlanOp> = (0..count)
        .map(|i| {
            let (op, w, h) = blank_op(kind);
            let step = if horizontal {
                w + ctx.config.spacing
            } else {
                h + ctx.config.spacing
            };
            let (x, y) = if horizontal {
                (ox + i as f64 * step, oy)
            } else {
                (ox, oy + i as f64 * step)
            };
            op.at(x, y).sized(w, h)
        })
        .collect();
    let created = run_plan(ctx, ops).await?;
    let axis = if horizontal { "row" } else { "column" };
    Ok(format!("Created {created} object(s) in a {axis}."))
}

async fn bulk_create(
    ctx: &ToolContext,
    count: usize,
    kind: ObjectKind,
) -> Result<String, AgentError> {
    let (ox, oy) = origin(ctx);
    let columns = (count as f64).sqrt().ceil() as usize;
    let ops: Vec<PlanOp> = (0..count)
        .map(|i| {
            let (op, w, h) = blank_op(kind);
            let (row, col) = (i / columns, i % columns);
            op.at(
                ox + col as f64 * (w + ctx.config.spacing),
                oy + row as f64 * (h + ctx.config.spacing),
            )
            .sized(w, h)
        })
        .collect();
    let created = run_plan(ctx, ops).await?;
    Ok(format!("Created {created} object(s)."))
}

async fn single_create(
    ctx: &ToolContext,
    kind: SingleKind,
    color: Option<String>,
    label: Option<String>,
    at: Option<(f64, f64)>,
) -> Result<String, AgentError> {
    let text = label.unwrap_or_default();
    let (mut op, w, h, noun) = match kind {
        SingleKind::Sticky => (PlanOp::sticky(text), 180.0, 180.0, "sticky note"),
        SingleKind::Shape(shape) => (PlanOp::shape(shape, text), 160.0, 120.0, "shape"),
        SingleKind::Text => (PlanOp::text(text), 220.0, 40.0, "text element"),
        SingleKind::Frame => (PlanOp::frame(text), 400.0, 300.0, "frame"),
    };
    if let Some(color) = color {
        op = op.with_color(color);
    }
    let (x, y) = match at {
        Some(point) => point,
        None => {
            let viewport = ctx.viewport.unwrap_or(ctx.config.default_viewport);
            let center = viewport.center();
            (center.x - w / 2.0, center.y - h / 2.0)
        }
    };
    run_plan(ctx, vec![op.at(x, y).sized(w, h)]).await?;
    Ok(format!("Created a {noun}."))
}

// --- templates ------------------------------------------------------------

struct FrameSpec {
    title: &'static str,
    col: usize,
    row: usize,
}

/// Titled frames on a uniform grid, each seeded with one starter sticky
/// placed inside the frame so it auto-parents
fn framed_template(
    ctx: &ToolContext,
    frames: &[FrameSpec],
    frame_w: f64,
    frame_h: f64,
) -> Vec<PlanOp> {
    let (ox, oy) = origin(ctx);
    let gap = ctx.config.spacing * 2.0;
    let mut ops = Vec::with_capacity(frames.len() * 2);
    for spec in frames {
        let x = ox + spec.col as f64 * (frame_w + gap);
        let y = oy + spec.row as f64 * (frame_h + gap);
        ops.push(
            PlanOp::frame(spec.title)
                .at(x, y)
                .sized(frame_w, frame_h),
        );
        ops.push(
            PlanOp::sticky("")
                .at(x + 40.0, y + 60.0)
                .sized(140.0, 140.0),
        );
    }
    ops
}

async fn template(ctx: &ToolContext, kind: TemplateKind) -> Result<String, AgentError> {
    let (ops, name) = match kind {
        TemplateKind::Swot => (
            framed_template(
                ctx,
                &[
                    FrameSpec { title: "Strengths", col: 0, row: 0 },
                    FrameSpec { title: "Weaknesses", col: 1, row: 0 },
                    FrameSpec { title: "Opportunities", col: 0, row: 1 },
                    FrameSpec { title: "Threats", col: 1, row: 1 },
                ],
                500.0,
                360.0,
            ),
            "SWOT analysis",
        ),
        TemplateKind::Kanban => (
            framed_template(
                ctx,
                &[
                    FrameSpec { title: "To Do", col: 0, row: 0 },
                    FrameSpec { title: "In Progress", col: 1, row: 0 },
                    FrameSpec { title: "Done", col: 2, row: 0 },
                ],
                360.0,
                640.0,
            ),
            "kanban board",
        ),
        TemplateKind::Retrospective => (
            framed_template(
                ctx,
                &[
                    FrameSpec { title: "What went well", col: 0, row: 0 },
                    FrameSpec { title: "What didn't", col: 1, row: 0 },
                    FrameSpec { title: "Action items", col: 2, row: 0 },
                ],
                400.0,
                520.0,
            ),
            "retrospective board",
        ),
        TemplateKind::Eisenhower => (
            framed_template(
                ctx,
                &[
                    FrameSpec { title: "Urgent & Important", col: 0, row: 0 },
                    FrameSpec { title: "Important, Not Urgent", col: 1, row: 0 },
                    FrameSpec { title: "Urgent, Not Important", col: 0, row: 1 },
                    FrameSpec { title: "Neither", col: 1, row: 1 },
                ],
                500.0,
                360.0,
            ),
            "Eisenhower matrix",
        ),
        TemplateKind::ProsCons => (
            framed_template(
                ctx,
                &[
                    FrameSpec { title: "Pros", col: 0, row: 0 },
                    FrameSpec { title: "Cons", col: 1, row: 0 },
                ],
                420.0,
                520.0,
            ),
            "pros and cons board",
        ),
        TemplateKind::UserJourney => (
            framed_template(
                ctx,
                &[
                    FrameSpec { title: "Awareness", col: 0, row: 0 },
                    FrameSpec { title: "Consideration", col: 1, row: 0 },
                    FrameSpec { title: "Decision", col: 2, row: 0 },
                    FrameSpec { title: "Onboarding", col: 3, row: 0 },
                    FrameSpec { title: "Retention", col: 4, row: 0 },
                ],
                320.0,
                520.0,
            ),
            "user journey map",
        ),
        TemplateKind::MindMap => (mind_map_ops(ctx), "mind map"),
        TemplateKind::Timeline => (timeline_ops(ctx), "timeline"),
    };
    run_plan(ctx, ops).await?;
    Ok(format!("Built a {name}."))
}

/// Central topic with four branches connected outward
fn mind_map_ops(ctx: &ToolContext) -> Vec<PlanOp> {
    let viewport = ctx.viewport.unwrap_or(ctx.config.default_viewport);
    let center = viewport.center();
    let (cx, cy) = (center.x - 90.0, center.y - 90.0);
    let mut ops = vec![PlanOp::shape(ShapeKind::Circle, "Central Topic")
        .with_temp("center")
        .at(cx, cy)
        .sized(180.0, 180.0)];

    let offsets: [(f64, f64); 4] = [(-380.0, -220.0), (260.0, -220.0), (-380.0, 220.0), (260.0, 220.0)];
    for (i, (dx, dy)) in offsets.iter().enumerate() {
        let temp = format!("branch{i}");
        ops.push(
            PlanOp::sticky(format!("Branch {}", i + 1))
                .with_temp(&temp)
                .at(cx + dx, cy + dy)
                .sized(160.0, 160.0),
        );
        ops.push(PlanOp::connector("center", temp));
    }
    ops
}

/// Five milestones in a row, chained left to right
fn timeline_ops(ctx: &ToolContext) -> Vec<PlanOp> {
    let (ox, oy) = origin(ctx);
    let mut ops = Vec::with_capacity(9);
    for i in 0..5 {
        ops.push(
            PlanOp::sticky(format!("Milestone {}", i + 1))
                .with_temp(format!("m{i}"))
                .at(ox + i as f64 * 260.0, oy)
                .sized(180.0, 180.0),
        );
    }
    for i in 1..5 {
        ops.push(PlanOp::connector(format!("m{}", i - 1), format!("m{i}")));
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AgentConfig;
    use crate::plan::PlanExecutor;
    use boardflow_store::{DocumentStore, MemoryStore};
    use boardflow_types::{BoardId, ObjectBody};
    use std::sync::Arc;

    fn context(store: Arc<MemoryStore>) -> ToolContext {
        let config = AgentConfig::default();
        ToolContext {
            plans: PlanExecutor::new(store.clone(), config.clone()),
            store,
            config,
            board: BoardId::from("b1"),
            actor: "tester".to_string(),
            viewport: None,
            prompt_label: "test".to_string(),
        }
    }

    fn board() -> BoardId {
        BoardId::from("b1")
    }

    #[tokio::test]
    async fn canned_recipes_touch_nothing() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        let reply = run_recipe(
            &ctx,
            Recipe::Canned {
                reply: "hi".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(reply, "hi");
        assert_eq!(store.commit_count(), 0);
    }

    #[tokio::test]
    async fn flowchart_builds_nodes_and_connectors() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(
            &ctx,
            Recipe::Flowchart {
                labels: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            },
        )
        .await
        .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let shapes: Vec<_> = objects
            .iter()
            .filter(|o| o.kind() == ObjectKind::Shape)
            .collect();
        let connectors: Vec<_> = objects
            .iter()
            .filter(|o| o.kind() == ObjectKind::Connector)
            .collect();
        assert_eq!(shapes.len(), 3);
        assert_eq!(connectors.len(), 2);
        // Endpoints resolved to real ids within the same plan.
        let shape_ids: HashSet<_> = shapes.iter().map(|s| s.id.clone()).collect();
        for connector in connectors {
            let ObjectBody::Connector {
                from_id,
                to_id,
                start_arrow,
                end_arrow,
                ..
            } = &connector.body
            else {
                panic!("not a connector");
            };
            assert!(shape_ids.contains(from_id.as_ref().unwrap()));
            assert!(shape_ids.contains(to_id.as_ref().unwrap()));
            assert!(!*start_arrow);
            assert!(*end_arrow);
        }
    }

    #[tokio::test]
    async fn grid_create_labels_first_row_only() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(
            &ctx,
            Recipe::GridCreate {
                rows: 2,
                cols: 2,
                labels: vec!["Alpha".to_string(), "Beta".to_string()],
            },
        )
        .await
        .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        assert_eq!(objects.len(), 4);
        let labeled: Vec<&str> = objects
            .iter()
            .filter_map(|o| o.body.text())
            .filter(|t| !t.is_empty())
            .collect();
        assert_eq!(labeled.len(), 2);
        assert!(labeled.contains(&"Alpha"));
        assert!(labeled.contains(&"Beta"));
    }

    #[tokio::test]
    async fn kanban_frames_adopt_their_seed_stickies() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(&ctx, Recipe::Template(TemplateKind::Kanban))
            .await
            .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        let frames: Vec<_> = objects
            .iter()
            .filter(|o| o.kind() == ObjectKind::Frame)
            .collect();
        let stickies: Vec<_> = objects
            .iter()
            .filter(|o| o.kind() == ObjectKind::Sticky)
            .collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(stickies.len(), 3);
        for sticky in stickies {
            assert!(sticky.parent_id.is_some(), "seed sticky not parented");
        }
    }

    #[tokio::test]
    async fn delete_by_kind_cascades_connectors() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(
            &ctx,
            Recipe::Flowchart {
                labels: vec!["A".to_string(), "B".to_string()],
            },
        )
        .await
        .unwrap();

        run_recipe(&ctx, Recipe::DeleteByKind { kind: ObjectKind::Shape })
            .await
            .unwrap();
        assert!(store.scan(&board()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bulk_recolor_covers_frames_by_default() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(&ctx, Recipe::Template(TemplateKind::ProsCons))
            .await
            .unwrap();

        let reply = run_recipe(
            &ctx,
            Recipe::BulkRecolor {
                kind: None,
                color: "#4CAF50".to_string(),
            },
        )
        .await
        .unwrap();
        // 2 frames + 2 seed stickies on the board; all carry a fill.
        assert!(reply.contains("4 object(s)"), "got: {reply}");
        for object in store.scan(&board()).await.unwrap() {
            let color = match &object.body {
                ObjectBody::Frame { color, .. } | ObjectBody::Sticky { color, .. } => color,
                other => panic!("unexpected body: {other:?}"),
            };
            assert_eq!(color, "#4CAF50");
        }
    }

    #[tokio::test]
    async fn recoloring_frames_changes_their_stored_fill() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(&ctx, Recipe::Template(TemplateKind::ProsCons))
            .await
            .unwrap();

        let reply = run_recipe(
            &ctx,
            Recipe::BulkRecolor {
                kind: Some(ObjectKind::Frame),
                color: "#F44336".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(reply.contains("2 object(s)"), "got: {reply}");
        for object in store.scan(&board()).await.unwrap() {
            match &object.body {
                ObjectBody::Frame { color, .. } => assert_eq!(color, "#F44336"),
                // Seed stickies keep their default fill.
                ObjectBody::Sticky { color, .. } => assert_ne!(color, "#F44336"),
                other => panic!("unexpected body: {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn arrange_grid_excludes_frames_and_connectors() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(&ctx, Recipe::Template(TemplateKind::Timeline))
            .await
            .unwrap();

        let reply = run_recipe(&ctx, Recipe::ArrangeGrid).await.unwrap();
        // 5 milestones move; 4 connectors do not.
        assert!(reply.contains("5 object(s)"), "got: {reply}");
    }

    #[tokio::test]
    async fn single_create_defaults_to_viewport_center() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(
            &ctx,
            Recipe::SingleCreate {
                kind: SingleKind::Sticky,
                color: Some("#F44336".to_string()),
                label: Some("Kickoff".to_string()),
                at: None,
            },
        )
        .await
        .unwrap();

        let objects = store.scan(&board()).await.unwrap();
        assert_eq!(objects.len(), 1);
        let sticky = &objects[0];
        assert_eq!(sticky.body.text(), Some("Kickoff"));
        // Default viewport is 1600x1000 at the origin.
        assert_eq!((sticky.x, sticky.y), (800.0 - 90.0, 500.0 - 90.0));
        let ObjectBody::Sticky { color, .. } = &sticky.body else {
            panic!("not a sticky");
        };
        assert_eq!(color, "#F44336");
    }

    #[tokio::test]
    async fn clear_board_reports_count() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        run_recipe(
            &ctx,
            Recipe::BulkCreate {
                count: 7,
                kind: ObjectKind::Sticky,
            },
        )
        .await
        .unwrap();

        let reply = run_recipe(&ctx, Recipe::ClearBoard).await.unwrap();
        assert!(reply.contains("7 objects"), "got: {reply}");
        assert!(store.scan(&board()).await.unwrap().is_empty());
    }
}
