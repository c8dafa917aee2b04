//! Tool surface exposed to the reasoning service
//!
//! Every tool parses its arguments into a typed struct at the boundary;
//! malformed arguments become `InvalidInput`, which the loop feeds back
//! as a structured error result rather than failing the request.
//!
//! Tool calls in one round run concurrently with no ordering guarantees
//! between them. Operations that need each other's output (a frame and
//! its children, connector endpoints) must be expressed as a single
//! `execute_plan` call, whose internal phases are strictly ordered.

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::mutate::{cascade_delete, clamp_into, containing_frame};
use crate::plan::{OpSpec, PlanExecutor, PlanOp};
use crate::reasoning::{ToolCall, ToolSchema};
use crate::snapshot::compact_snapshot;
use boardflow_layout::{run_layout, AlignEdge, LayoutItem, LayoutMode, LayoutParams};
use boardflow_store::{commit_chunked, BatchOp, DocumentStore, ObjectPatch};
use boardflow_types::{BoardId, BoardObject, ObjectId, ObjectKind, Rect, ShapeKind};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

/// Everything a tool handler needs for one request
#[derive(Clone)]
pub(crate) struct ToolContext {
    pub(crate) store: Arc<dyn DocumentStore>,
    pub(crate) plans: PlanExecutor,
    pub(crate) config: AgentConfig,
    pub(crate) board: BoardId,
    pub(crate) actor: String,
    pub(crate) viewport: Option<Rect>,
    pub(crate) prompt_label: String,
}

/// Result of one tool invocation
#[derive(Debug, Clone)]
pub(crate) struct ToolOutcome {
    /// True for tools that never write
    pub(crate) read_only: bool,
    /// Objects created by this invocation
    pub(crate) created: usize,
    /// Structured result fed back to the reasoning service
    pub(crate) payload: Value,
}

impl ToolOutcome {
    fn mutated(created: usize, payload: Value) -> Self {
        Self {
            read_only: false,
            created,
            payload,
        }
    }

    fn read(payload: Value) -> Self {
        Self {
            read_only: true,
            created: 0,
            payload,
        }
    }
}

/// Dispatch one tool invocation
pub(crate) async fn dispatch(
    ctx: &ToolContext,
    call: &ToolCall,
) -> Result<ToolOutcome, AgentError> {
    tracing::debug!(tool = %call.name, id = %call.id, "dispatching tool call");
    match call.name.as_str() {
        "get_board_summary" => get_board_summary(ctx).await,
        "execute_plan" => execute_plan(ctx, parse(call)?).await,
        "create_sticky" => create_one(ctx, sticky_op(parse(call)?)).await,
        "create_shape" => create_one(ctx, shape_op(parse(call)?)).await,
        "create_frame" => create_one(ctx, frame_op(parse(call)?)).await,
        "create_text" => create_one(ctx, text_op(parse(call)?)).await,
        "create_sticker" => create_one(ctx, sticker_op(parse(call)?)).await,
        "create_connector" => create_one(ctx, connector_op(parse(call)?)).await,
        "move_object" => move_object(ctx, parse(call)?).await,
        "resize_object" => resize_object(ctx, parse(call)?).await,
        "rotate_object" => rotate_object(ctx, parse(call)?).await,
        "update_color" => update_color(ctx, parse(call)?).await,
        "update_text" => update_text(ctx, parse(call)?).await,
        "update_parent" => update_parent(ctx, parse(call)?).await,
        "delete_object" => delete_objects(ctx, vec![parse::<IdArgs>(call)?.id], true).await,
        "delete_objects" => delete_objects(ctx, parse::<IdsArgs>(call)?.ids, false).await,
        "arrange_objects" => arrange_objects(ctx, parse(call)?).await,
        other => Err(AgentError::InvalidInput(format!("unknown tool: {other}"))),
    }
}

fn parse<T: for<'de> Deserialize<'de>>(call: &ToolCall) -> Result<T, AgentError> {
    serde_json::from_value(call.args.clone())
        .map_err(|e| AgentError::InvalidInput(format!("{}: {e}", call.name)))
}

// --- argument types ------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanArgs {
    ops: Vec<PlanOp>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCommon {
    x: Option<f64>,
    y: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    parent_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StickyArgs {
    text: Option<String>,
    color: Option<String>,
    #[serde(flatten)]
    common: CreateCommon,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapeArgs {
    shape: Option<ShapeKind>,
    color: Option<String>,
    text: Option<String>,
    #[serde(flatten)]
    common: CreateCommon,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrameArgs {
    title: Option<String>,
    borderless: Option<bool>,
    color: Option<String>,
    #[serde(flatten)]
    common: CreateCommon,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextArgs {
    text: Option<String>,
    font_size: Option<f64>,
    color: Option<String>,
    #[serde(flatten)]
    common: CreateCommon,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StickerArgs {
    query: Option<String>,
    emoji: Option<String>,
    #[serde(flatten)]
    common: CreateCommon,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectorArgs {
    from_id: Option<String>,
    to_id: Option<String>,
    start_arrow: Option<bool>,
    end_arrow: Option<bool>,
    label: Option<String>,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdsArgs {
    ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoveArgs {
    id: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResizeArgs {
    id: String,
    width: f64,
    height: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RotateArgs {
    id: String,
    degrees: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorArgs {
    id: String,
    color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextUpdateArgs {
    id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParentArgs {
    id: String,
    parent_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArrangeArgs {
    ids: Option<Vec<String>>,
    mode: String,
    columns: Option<usize>,
    spacing: Option<f64>,
    radius: Option<f64>,
    arc_degrees: Option<f64>,
    edge: Option<String>,
}

// --- create tools --------------------------------------------------------

fn apply_common(mut op: PlanOp, common: CreateCommon) -> PlanOp {
    op.x = common.x;
    op.y = common.y;
    op.width = common.width;
    op.height = common.height;
    op.parent_id = common.parent_id;
    op
}

fn sticky_op(args: StickyArgs) -> PlanOp {
    let mut op = PlanOp::sticky(args.text.unwrap_or_default());
    if let Some(color) = args.color {
        op = op.with_color(color);
    }
    apply_common(op, args.common)
}

fn shape_op(args: ShapeArgs) -> PlanOp {
    let mut op = PlanOp::shape(
        args.shape.unwrap_or(ShapeKind::Rect),
        args.text.unwrap_or_default(),
    );
    if let Some(color) = args.color {
        op = op.with_color(color);
    }
    apply_common(op, args.common)
}

fn frame_op(args: FrameArgs) -> PlanOp {
    let mut op = PlanOp::frame(args.title.unwrap_or_default());
    if let OpSpec::Frame { borderless, .. } = &mut op.spec {
        *borderless = args.borderless;
    }
    if let Some(color) = args.color {
        op = op.with_color(color);
    }
    apply_common(op, args.common)
}

fn text_op(args: TextArgs) -> PlanOp {
    let mut op = PlanOp::text(args.text.unwrap_or_default());
    if let OpSpec::Text { font_size, .. } = &mut op.spec {
        *font_size = args.font_size;
    }
    if let Some(color) = args.color {
        op = op.with_color(color);
    }
    apply_common(op, args.common)
}

fn sticker_op(args: StickerArgs) -> PlanOp {
    let op = PlanOp {
        spec: OpSpec::Sticker {
            query: args.query,
            emoji: args.emoji,
        },
        ..PlanOp::sticky("")
    };
    apply_common(op, args.common)
}

fn connector_op(args: ConnectorArgs) -> PlanOp {
    PlanOp {
        spec: OpSpec::Connector {
            from_id: args.from_id,
            to_id: args.to_id,
            start_arrow: args.start_arrow,
            end_arrow: args.end_arrow,
            label: args.label,
            color: args.color,
        },
        ..PlanOp::sticky("")
    }
}

/// Execute a single-op plan, then auto-parent against existing frames
/// (the one read the containment pass is allowed)
async fn create_one(ctx: &ToolContext, op: PlanOp) -> Result<ToolOutcome, AgentError> {
    let outcome = ctx
        .plans
        .execute(
            &ctx.board,
            &ctx.actor,
            vec![op],
            ctx.viewport,
            Some(&ctx.prompt_label),
        )
        .await?;

    if let Some(id) = outcome.created.first() {
        if let Some(object) = ctx.store.get(&ctx.board, id).await? {
            if object.can_have_parent() && object.parent_id.is_none() {
                let others = ctx.store.scan(&ctx.board).await?;
                if let Some(frame_id) = containing_frame(&others, &object.bounds()) {
                    ctx.store
                        .update(&ctx.board, id, ObjectPatch::new().parented(frame_id))
                        .await?;
                }
            }
        }
    }

    Ok(ToolOutcome::mutated(
        outcome.created.len(),
        json!({
            "created": outcome.created,
            "partialFailures": outcome.partial_failures,
        }),
    ))
}

// --- plan & read tools ---------------------------------------------------

async fn execute_plan(ctx: &ToolContext, args: PlanArgs) -> Result<ToolOutcome, AgentError> {
    let outcome = ctx
        .plans
        .execute(
            &ctx.board,
            &ctx.actor,
            args.ops,
            ctx.viewport,
            Some(&ctx.prompt_label),
        )
        .await?;
    Ok(ToolOutcome::mutated(
        outcome.created.len(),
        json!({
            "created": outcome.created,
            "partialFailures": outcome.partial_failures,
        }),
    ))
}

async fn get_board_summary(ctx: &ToolContext) -> Result<ToolOutcome, AgentError> {
    let objects = ctx.store.scan(&ctx.board).await?;
    Ok(ToolOutcome::read(json!({
        "summary": compact_snapshot(&objects, ctx.config.snapshot_cap),
    })))
}

// --- single-object mutations ---------------------------------------------

async fn fetch(ctx: &ToolContext, id: &str) -> Result<BoardObject, AgentError> {
    let id = ObjectId::new(id);
    ctx.store
        .get(&ctx.board, &id)
        .await?
        .ok_or(AgentError::NotFound(id))
}

async fn move_object(ctx: &ToolContext, args: MoveArgs) -> Result<ToolOutcome, AgentError> {
    let object = fetch(ctx, &args.id).await?;
    let mut patch = ObjectPatch::new().at(args.x, args.y);
    if object.can_have_parent() {
        // Containment is re-tested on every move; crossing a frame edge
        // attaches or detaches.
        let others = ctx.store.scan(&ctx.board).await?;
        let bounds = Rect::new(args.x, args.y, object.width, object.height);
        patch = match containing_frame(&others, &bounds) {
            Some(frame_id) if frame_id != object.id => patch.parented(frame_id),
            _ => patch.unparented(),
        };
    }
    ctx.store.update(&ctx.board, &object.id, patch).await?;
    Ok(ToolOutcome::mutated(0, json!({ "moved": object.id })))
}

async fn resize_object(ctx: &ToolContext, args: ResizeArgs) -> Result<ToolOutcome, AgentError> {
    if !(args.width > 0.0 && args.height > 0.0)
        || !args.width.is_finite()
        || !args.height.is_finite()
    {
        return Err(AgentError::InvalidInput(
            "resize_object: width and height must be positive".to_string(),
        ));
    }
    let object = fetch(ctx, &args.id).await?;
    ctx.store
        .update(
            &ctx.board,
            &object.id,
            ObjectPatch::new().sized(args.width, args.height),
        )
        .await?;
    Ok(ToolOutcome::mutated(0, json!({ "resized": object.id })))
}

async fn rotate_object(ctx: &ToolContext, args: RotateArgs) -> Result<ToolOutcome, AgentError> {
    let object = fetch(ctx, &args.id).await?;
    ctx.store
        .update(
            &ctx.board,
            &object.id,
            ObjectPatch::new().rotated(args.degrees),
        )
        .await?;
    Ok(ToolOutcome::mutated(0, json!({ "rotated": object.id })))
}

async fn update_color(ctx: &ToolContext, args: ColorArgs) -> Result<ToolOutcome, AgentError> {
    let object = fetch(ctx, &args.id).await?;
    ctx.store
        .update(&ctx.board, &object.id, ObjectPatch::new().colored(args.color))
        .await?;
    Ok(ToolOutcome::mutated(0, json!({ "recolored": object.id })))
}

async fn update_text(ctx: &ToolContext, args: TextUpdateArgs) -> Result<ToolOutcome, AgentError> {
    let object = fetch(ctx, &args.id).await?;
    ctx.store
        .update(&ctx.board, &object.id, ObjectPatch::new().with_text(args.text))
        .await?;
    Ok(ToolOutcome::mutated(0, json!({ "updated": object.id })))
}

async fn update_parent(ctx: &ToolContext, args: ParentArgs) -> Result<ToolOutcome, AgentError> {
    let object = fetch(ctx, &args.id).await?;
    let Some(parent_ref) = args.parent_id else {
        ctx.store
            .update(&ctx.board, &object.id, ObjectPatch::new().unparented())
            .await?;
        return Ok(ToolOutcome::mutated(0, json!({ "detached": object.id })));
    };

    if !object.can_have_parent() {
        return Err(AgentError::InvalidInput(format!(
            "update_parent: a {} cannot be parented",
            object.kind()
        )));
    }
    let frame = fetch(ctx, &parent_ref).await?;
    let boardflow_types::ObjectBody::Frame { borderless, .. } = &frame.body else {
        return Err(AgentError::InvalidInput(format!(
            "update_parent: {} is not a frame",
            frame.id
        )));
    };

    // Freshly attached children must land inside the frame interior.
    let interior = boardflow_types::frame_interior(&frame.bounds(), *borderless);
    let (x, y) = clamp_into(&interior, object.x, object.y, object.width, object.height);
    ctx.store
        .update(
            &ctx.board,
            &object.id,
            ObjectPatch::new().at(x, y).parented(frame.id.clone()),
        )
        .await?;
    Ok(ToolOutcome::mutated(
        0,
        json!({ "attached": object.id, "parent": frame.id }),
    ))
}

async fn delete_objects(
    ctx: &ToolContext,
    ids: Vec<String>,
    strict: bool,
) -> Result<ToolOutcome, AgentError> {
    let objects = ctx.store.scan(&ctx.board).await?;
    let known: HashSet<&ObjectId> = objects.iter().map(|o| &o.id).collect();
    let mut targets: HashSet<ObjectId> = HashSet::new();
    for id in ids {
        let id = ObjectId::new(id);
        if known.contains(&id) {
            targets.insert(id);
        } else if strict {
            return Err(AgentError::NotFound(id));
        }
    }
    if targets.is_empty() {
        return Ok(ToolOutcome::mutated(0, json!({ "deleted": 0 })));
    }
    let ops = cascade_delete(&objects, &targets);
    commit_chunked(ctx.store.as_ref(), &ctx.board, ops).await?;
    Ok(ToolOutcome::mutated(0, json!({ "deleted": targets.len() })))
}

// --- arrangement ---------------------------------------------------------

fn parse_mode(args: &ArrangeArgs, count: usize) -> Result<LayoutMode, AgentError> {
    let mode = match args.mode.as_str() {
        "row" => LayoutMode::Row,
        "column" => LayoutMode::Column,
        "grid" => LayoutMode::Grid {
            columns: args
                .columns
                .unwrap_or_else(|| (count as f64).sqrt().ceil() as usize)
                .max(1),
        },
        "staggered" => LayoutMode::Staggered {
            columns: args
                .columns
                .unwrap_or_else(|| (count as f64).sqrt().ceil() as usize)
                .max(1),
        },
        "circular" => LayoutMode::Circular {
            radius: args.radius.unwrap_or(0.0),
        },
        "fan" => LayoutMode::Fan {
            arc_degrees: args.arc_degrees.unwrap_or(180.0),
        },
        "pack" => LayoutMode::Pack,
        "align" => {
            let edge = match args.edge.as_deref() {
                Some("left") => AlignEdge::Left,
                Some("right") => AlignEdge::Right,
                Some("top") => AlignEdge::Top,
                Some("bottom") => AlignEdge::Bottom,
                Some("centerX") => AlignEdge::CenterX,
                Some("centerY") => AlignEdge::CenterY,
                other => {
                    return Err(AgentError::InvalidInput(format!(
                        "arrange_objects: unknown align edge {other:?}"
                    )))
                }
            };
            LayoutMode::Align { edge }
        }
        "distributeHorizontal" => LayoutMode::DistributeHorizontal,
        "distributeVertical" => LayoutMode::DistributeVertical,
        other => {
            return Err(AgentError::InvalidInput(format!(
                "arrange_objects: unknown mode {other:?}"
            )))
        }
    };
    Ok(mode)
}

async fn arrange_objects(ctx: &ToolContext, args: ArrangeArgs) -> Result<ToolOutcome, AgentError> {
    let objects = ctx.store.scan(&ctx.board).await?;
    let chosen: Vec<&BoardObject> = match &args.ids {
        Some(ids) => {
            let wanted: HashSet<ObjectId> = ids.iter().map(|i| ObjectId::new(i.clone())).collect();
            objects.iter().filter(|o| wanted.contains(&o.id)).collect()
        }
        None => objects
            .iter()
            .filter(|o| !matches!(o.kind(), ObjectKind::Connector | ObjectKind::Frame))
            .collect(),
    };
    if chosen.is_empty() {
        return Err(AgentError::InvalidInput(
            "arrange_objects: nothing to arrange".to_string(),
        ));
    }

    let items: Vec<LayoutItem> = chosen
        .iter()
        .map(|o| LayoutItem::new(o.id.clone(), o.x, o.y, o.width, o.height))
        .collect();
    let mode = parse_mode(&args, items.len())?;

    // Linear modes start at the set's top-left corner; radial modes
    // pivot on its centroid, so things stay roughly where they were.
    let mut params = LayoutParams::default();
    if let Some(spacing) = args.spacing {
        params = params.with_spacing(spacing);
    }
    params = match mode {
        LayoutMode::Circular { .. } | LayoutMode::Fan { .. } => {
            let cx = chosen.iter().map(|o| o.x + o.width / 2.0).sum::<f64>() / chosen.len() as f64;
            let cy = chosen.iter().map(|o| o.y + o.height / 2.0).sum::<f64>() / chosen.len() as f64;
            params.with_origin(cx, cy)
        }
        _ => {
            let min_x = chosen.iter().map(|o| o.x).fold(f64::INFINITY, f64::min);
            let min_y = chosen.iter().map(|o| o.y).fold(f64::INFINITY, f64::min);
            params.with_origin(min_x, min_y)
        }
    };

    let placements = run_layout(&items, mode, &params)?;
    let ops: Vec<BatchOp> = placements
        .iter()
        .map(|p| BatchOp::Update(p.id.clone(), ObjectPatch::new().at(p.x, p.y)))
        .collect();
    commit_chunked(ctx.store.as_ref(), &ctx.board, ops).await?;
    Ok(ToolOutcome::mutated(
        0,
        json!({ "arranged": placements.len() }),
    ))
}

// --- schemas -------------------------------------------------------------

fn schema(name: &str, description: &str, properties: Value, required: &[&str]) -> ToolSchema {
    ToolSchema {
        name: name.to_string(),
        description: description.to_string(),
        parameters: json!({
            "type": "object",
            "properties": properties,
            "required": required,
        }),
    }
}

fn position_props() -> Value {
    json!({
        "x": { "type": "number" },
        "y": { "type": "number" },
        "width": { "type": "number" },
        "height": { "type": "number" },
        "parentId": { "type": "string", "description": "Frame to attach to" },
    })
}

fn merged(mut base: Value, extra: Value) -> Value {
    if let (Some(base_map), Some(extra_map)) = (base.as_object_mut(), extra.as_object()) {
        for (k, v) in extra_map {
            base_map.insert(k.clone(), v.clone());
        }
    }
    base
}

/// Declared schemas for every tool, in a stable order
#[must_use]
pub fn tool_schemas() -> Vec<ToolSchema> {
    vec![
        schema(
            "get_board_summary",
            "Compact one-line-per-object summary of the board. Read-only.",
            json!({}),
            &[],
        ),
        schema(
            "execute_plan",
            "Create many objects in one atomic batch. Use tempId to reference \
             objects created earlier in the same plan (parents, connector \
             endpoints). Required whenever objects depend on each other.",
            json!({
                "ops": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": merged(position_props(), json!({
                            "op": { "type": "string", "enum": ["sticky", "shape", "frame", "text", "sticker", "connector"] },
                            "tempId": { "type": "string" },
                            "text": { "type": "string" },
                            "title": { "type": "string" },
                            "color": { "type": "string" },
                            "shape": { "type": "string", "enum": ["rect", "circle", "triangle", "diamond", "star", "cross", "arrow", "hexagon"] },
                            "query": { "type": "string" },
                            "emoji": { "type": "string" },
                            "fromId": { "type": "string" },
                            "toId": { "type": "string" },
                            "startArrow": { "type": "boolean" },
                            "endArrow": { "type": "boolean" },
                            "label": { "type": "string" },
                            "group": { "type": "integer" },
                            "groupLabel": { "type": "string" },
                        })),
                        "required": ["op"],
                    },
                },
            }),
            &["ops"],
        ),
        schema(
            "create_sticky",
            "Create one sticky note.",
            merged(
                position_props(),
                json!({ "text": { "type": "string" }, "color": { "type": "string" } }),
            ),
            &[],
        ),
        schema(
            "create_shape",
            "Create one shape.",
            merged(
                position_props(),
                json!({
                    "shape": { "type": "string", "enum": ["rect", "circle", "triangle", "diamond", "star", "cross", "arrow", "hexagon"] },
                    "color": { "type": "string" },
                    "text": { "type": "string" },
                }),
            ),
            &[],
        ),
        schema(
            "create_frame",
            "Create one frame (container).",
            merged(
                position_props(),
                json!({ "title": { "type": "string" }, "borderless": { "type": "boolean" }, "color": { "type": "string" } }),
            ),
            &[],
        ),
        schema(
            "create_text",
            "Create one text element.",
            merged(
                position_props(),
                json!({
                    "text": { "type": "string" },
                    "fontSize": { "type": "number" },
                    "color": { "type": "string" },
                }),
            ),
            &[],
        ),
        schema(
            "create_sticker",
            "Create one sticker from an emoji or an image search query.",
            merged(
                position_props(),
                json!({ "query": { "type": "string" }, "emoji": { "type": "string" } }),
            ),
            &[],
        ),
        schema(
            "create_connector",
            "Create a connector between two existing objects.",
            json!({
                "fromId": { "type": "string" },
                "toId": { "type": "string" },
                "startArrow": { "type": "boolean" },
                "endArrow": { "type": "boolean" },
                "label": { "type": "string" },
                "color": { "type": "string" },
            }),
            &["fromId", "toId"],
        ),
        schema(
            "move_object",
            "Move one object to an absolute position.",
            json!({
                "id": { "type": "string" },
                "x": { "type": "number" },
                "y": { "type": "number" },
            }),
            &["id", "x", "y"],
        ),
        schema(
            "resize_object",
            "Resize one object.",
            json!({
                "id": { "type": "string" },
                "width": { "type": "number" },
                "height": { "type": "number" },
            }),
            &["id", "width", "height"],
        ),
        schema(
            "rotate_object",
            "Set one object's rotation in degrees.",
            json!({
                "id": { "type": "string" },
                "degrees": { "type": "number" },
            }),
            &["id", "degrees"],
        ),
        schema(
            "update_color",
            "Change one object's color.",
            json!({
                "id": { "type": "string" },
                "color": { "type": "string" },
            }),
            &["id", "color"],
        ),
        schema(
            "update_text",
            "Replace one object's text (or a frame's title).",
            json!({
                "id": { "type": "string" },
                "text": { "type": "string" },
            }),
            &["id", "text"],
        ),
        schema(
            "update_parent",
            "Attach an object to a frame (omit parentId to detach). The \
             object is repositioned into the frame if needed.",
            json!({
                "id": { "type": "string" },
                "parentId": { "type": "string" },
            }),
            &["id"],
        ),
        schema(
            "delete_object",
            "Delete one object. Deleting a frame releases its children and \
             removes connectors left dangling.",
            json!({ "id": { "type": "string" } }),
            &["id"],
        ),
        schema(
            "delete_objects",
            "Delete several objects at once, with the same cascades as \
             delete_object.",
            json!({ "ids": { "type": "array", "items": { "type": "string" } } }),
            &["ids"],
        ),
        schema(
            "arrange_objects",
            "Re-layout existing objects. Modes: row, column, grid, staggered, \
             circular, fan, pack, align, distributeHorizontal, distributeVertical.",
            json!({
                "ids": { "type": "array", "items": { "type": "string" } },
                "mode": { "type": "string" },
                "columns": { "type": "integer" },
                "spacing": { "type": "number" },
                "radius": { "type": "number" },
                "arcDegrees": { "type": "number" },
                "edge": { "type": "string", "enum": ["left", "right", "top", "bottom", "centerX", "centerY"] },
            }),
            &["mode"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardflow_store::MemoryStore;

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

    fn call(name: &str, args: Value) -> ToolCall {
        ToolCall {
            id: "c1".to_string(),
            name: name.to_string(),
            args,
        }
    }

    #[tokio::test]
    async fn malformed_args_become_invalid_input() {
        let ctx = context(Arc::new(MemoryStore::new()));
        let err = dispatch(&ctx, &call("move_object", json!({ "id": "x" })))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unknown_tool_is_invalid_input() {
        let ctx = context(Arc::new(MemoryStore::new()));
        let err = dispatch(&ctx, &call("paint_the_moon", json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let ctx = context(Arc::new(MemoryStore::new()));
        let err = dispatch(
            &ctx,
            &call("move_object", json!({ "id": "ghost", "x": 0.0, "y": 0.0 })),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AgentError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_then_move_into_frame_attaches() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());

        let frame = dispatch(
            &ctx,
            &call(
                "create_frame",
                json!({ "title": "Zone", "x": 0.0, "y": 0.0, "width": 600.0, "height": 400.0 }),
            ),
        )
        .await
        .unwrap();
        let sticky = dispatch(
            &ctx,
            &call(
                "create_sticky",
                json!({ "text": "drifter", "x": 2000.0, "y": 2000.0, "width": 100.0, "height": 100.0 }),
            ),
        )
        .await
        .unwrap();
        let sticky_id = sticky.payload["created"][0].as_str().unwrap().to_string();
        let frame_id = frame.payload["created"][0].as_str().unwrap().to_string();

        dispatch(
            &ctx,
            &call("move_object", json!({ "id": sticky_id, "x": 200.0, "y": 100.0 })),
        )
        .await
        .unwrap();

        let board = BoardId::from("b1");
        let moved = store
            .get(&board, &ObjectId::new(sticky_id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(moved.parent_id, Some(ObjectId::new(frame_id)));
    }

    #[tokio::test]
    async fn attach_repositions_child_into_interior() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());

        let frame = dispatch(
            &ctx,
            &call(
                "create_frame",
                json!({ "title": "Zone", "x": 0.0, "y": 0.0, "width": 600.0, "height": 400.0 }),
            ),
        )
        .await
        .unwrap();
        let sticky = dispatch(
            &ctx,
            &call(
                "create_sticky",
                json!({ "text": "far", "x": 5000.0, "y": 5000.0, "width": 100.0, "height": 100.0 }),
            ),
        )
        .await
        .unwrap();
        let sticky_id = sticky.payload["created"][0].as_str().unwrap().to_string();
        let frame_id = frame.payload["created"][0].as_str().unwrap().to_string();

        dispatch(
            &ctx,
            &call("update_parent", json!({ "id": sticky_id, "parentId": frame_id })),
        )
        .await
        .unwrap();

        let board = BoardId::from("b1");
        let attached = store
            .get(&board, &ObjectId::new(sticky_id))
            .await
            .unwrap()
            .unwrap();
        let frame_obj = store
            .get(&board, &ObjectId::new(frame_id))
            .await
            .unwrap()
            .unwrap();
        let interior = boardflow_types::frame_interior(&frame_obj.bounds(), false);
        assert!(interior.contains_rect(&attached.bounds()));
    }

    #[tokio::test]
    async fn deleting_a_frame_cascades() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());

        let plan = dispatch(
            &ctx,
            &call(
                "execute_plan",
                json!({ "ops": [
                    { "op": "frame", "tempId": "f", "title": "F", "x": 0.0, "y": 0.0, "width": 600.0, "height": 400.0 },
                    { "op": "sticky", "tempId": "s", "text": "child", "x": 100.0, "y": 100.0, "width": 100.0, "height": 100.0 },
                    { "op": "connector", "fromId": "f", "toId": "s" },
                ] }),
            ),
        )
        .await
        .unwrap();
        assert_eq!(plan.created, 3);
        let frame_id = plan.payload["created"][0].as_str().unwrap().to_string();

        dispatch(&ctx, &call("delete_object", json!({ "id": frame_id })))
            .await
            .unwrap();

        let board = BoardId::from("b1");
        let remaining = store.scan(&board).await.unwrap();
        assert_eq!(remaining.len(), 1, "child survives, connector goes");
        assert_eq!(remaining[0].body.text(), Some("child"));
        assert_eq!(remaining[0].parent_id, None);
    }

    #[tokio::test]
    async fn arrange_grid_moves_everything() {
        let store = Arc::new(MemoryStore::new());
        let ctx = context(store.clone());
        dispatch(
            &ctx,
            &call(
                "execute_plan",
                json!({ "ops": (0..4).map(|i| json!({
                    "op": "sticky", "text": format!("n{i}"),
                    "x": 0.0, "y": 0.0, "width": 100.0, "height": 100.0,
                })).collect::<Vec<_>>() }),
            ),
        )
        .await
        .unwrap();

        let outcome = dispatch(
            &ctx,
            &call("arrange_objects", json!({ "mode": "grid", "columns": 2 })),
        )
        .await
        .unwrap();
        assert_eq!(outcome.payload["arranged"], 4);

        let board = BoardId::from("b1");
        let mut positions: Vec<(i64, i64)> = store
            .scan(&board)
            .await
            .unwrap()
            .iter()
            .map(|o| (o.x as i64, o.y as i64))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        assert_eq!(positions.len(), 4);
    }

    #[test]
    fn schemas_cover_the_dispatch_table() {
        let names: Vec<String> = tool_schemas().into_iter().map(|s| s.name).collect();
        for name in [
            "get_board_summary",
            "execute_plan",
            "create_sticky",
            "create_connector",
            "move_object",
            "update_parent",
            "delete_objects",
            "arrange_objects",
        ] {
            assert!(names.contains(&name.to_string()), "missing schema: {name}");
        }
    }
}
