//! The command agent
//!
//! Single entry point for a user command: try the deterministic
//! classifier first, and only when no recipe matches run the bounded
//! tool-calling loop against the injected [`ReasoningService`].
//!
//! The loop is bounded by rounds, not tokens: each round is one
//! reasoning call plus the concurrent execution of whatever tools it
//! requested. Tool failures become structured results the service can
//! react to; only a reasoning failure aborts the request.

use crate::classify::classify;
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::images::ImageSearch;
use crate::plan::PlanExecutor;
use crate::reasoning::{
    ChatMessage, ReasoningRequest, ReasoningService, ToolCall, ToolResult,
};
use crate::recipes::run_recipe;
use crate::snapshot::{compact_snapshot, references_existing};
use crate::tools::{dispatch, tool_schemas, ToolContext, ToolOutcome};
use boardflow_store::DocumentStore;
use boardflow_types::{BoardId, ObjectId, Rect};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Longest prompt excerpt kept as a provenance label on created objects
const PROMPT_LABEL_MAX: usize = 80;

const SYSTEM_PROMPT: &str = "\
You are a canvas assistant operating on a shared visual board. You act \
only through the provided tools; reply in text once the work is done.

Rules:
- When creating more than one object, or objects that reference each \
other (a frame and its contents, connector endpoints), use a single \
execute_plan call. Give ops a tempId and reference it from parentId, \
fromId and toId; never invent real object ids.
- Coordinates are absolute; x grows right, y grows down. Place new \
content inside the viewport you are given unless told otherwise.
- Use get_board_summary before modifying objects you have not seen.
- When asked for N objects, create exactly N.
- Do not ask clarifying questions; make a reasonable choice and act.";

/// Turns user commands into board mutations
///
/// Cheap to clone; all collaborators are behind `Arc`.
#[derive(Clone)]
pub struct CanvasAgent {
    store: Arc<dyn DocumentStore>,
    reasoning: Arc<dyn ReasoningService>,
    images: Option<Arc<dyn ImageSearch>>,
    config: AgentConfig,
}

impl CanvasAgent {
    /// New agent over a store and reasoning service
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, reasoning: Arc<dyn ReasoningService>) -> Self {
        Self {
            store,
            reasoning,
            images: None,
            config: AgentConfig::default(),
        }
    }

    /// With an image-search collaborator for GIF-backed stickers
    #[must_use]
    pub fn with_images(mut self, images: Arc<dyn ImageSearch>) -> Self {
        self.images = Some(images);
        self
    }

    /// With a custom configuration
    #[must_use]
    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one command to completion and return the reply text
    pub async fn run(
        &self,
        prompt: &str,
        board: &BoardId,
        actor: &str,
        selection: &[ObjectId],
        viewport: Option<Rect>,
    ) -> Result<String, AgentError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AgentError::InvalidInput("empty command".to_string()));
        }
        let ctx = self.context(board, actor, prompt, viewport);

        if let Some(recipe) = classify(prompt) {
            tracing::debug!(?recipe, "classified into a recipe");
            match run_recipe(&ctx, recipe).await {
                Ok(reply) => return Ok(reply),
                // A failed recipe falls through to the reasoning loop
                // rather than surfacing a deterministic-path error.
                Err(err) => tracing::warn!(%err, "recipe failed, falling back"),
            }
        }

        self.run_loop(&ctx, prompt, selection).await
    }

    fn context(
        &self,
        board: &BoardId,
        actor: &str,
        prompt: &str,
        viewport: Option<Rect>,
    ) -> ToolContext {
        let mut plans = PlanExecutor::new(self.store.clone(), self.config.clone());
        if let Some(images) = &self.images {
            plans = plans.with_images(images.clone());
        }
        ToolContext {
            store: self.store.clone(),
            plans,
            config: self.config.clone(),
            board: board.clone(),
            actor: actor.to_string(),
            viewport,
            prompt_label: prompt.chars().take(PROMPT_LABEL_MAX).collect(),
        }
    }

    async fn run_loop(
        &self,
        ctx: &ToolContext,
        prompt: &str,
        selection: &[ObjectId],
    ) -> Result<String, AgentError> {
        let mut messages = vec![ChatMessage::User {
            text: self.opening_message(ctx, prompt, selection).await?,
        }];
        let mut ledger = ActionLedger::default();
        let mut final_text: Option<String> = None;

        for round in 0..self.config.max_rounds {
            let reply = self
                .reasoning
                .complete(ReasoningRequest {
                    system: SYSTEM_PROMPT.to_string(),
                    tools: tool_schemas(),
                    messages: messages.clone(),
                })
                .await?;
            tracing::debug!(round, calls = reply.calls.len(), "reasoning round");

            if reply.calls.is_empty() {
                final_text = reply.text;
                break;
            }
            messages.push(ChatMessage::Assistant {
                text: reply.text,
                calls: reply.calls.clone(),
            });
            let (results, mutated) = self.run_calls(ctx, &reply.calls, &mut ledger).await?;
            messages.push(ChatMessage::ToolResults { results });
            // A successful mutation ends the loop; only rounds that merely
            // read (or failed) earn the service another turn.
            if mutated {
                break;
            }
        }

        // One corrective round when a counted request came up short.
        if let Some(deficit) = self.creation_deficit(prompt, &ledger) {
            tracing::info!(deficit, "running quantity-correction round");
            messages.push(ChatMessage::User {
                text: format!(
                    "Only {} of the requested objects were created. Create exactly \
                     {deficit} more now, in one execute_plan call.",
                    ledger.created
                ),
            });
            let reply = self
                .reasoning
                .complete(ReasoningRequest {
                    system: SYSTEM_PROMPT.to_string(),
                    tools: tool_schemas(),
                    messages: messages.clone(),
                })
                .await?;
            if !reply.calls.is_empty() {
                let _ = self.run_calls(ctx, &reply.calls, &mut ledger).await?;
            }
        }

        if ledger.is_empty() {
            return Ok(final_text
                .unwrap_or_else(|| "I didn't make any changes to the board.".to_string()));
        }
        Ok(ledger.summary())
    }

    /// Prompt plus board context in one user message
    async fn opening_message(
        &self,
        ctx: &ToolContext,
        prompt: &str,
        selection: &[ObjectId],
    ) -> Result<String, AgentError> {
        let viewport = ctx.viewport.unwrap_or(self.config.default_viewport);
        let mut text = format!(
            "{prompt}\n\nViewport: x={:.0} y={:.0} width={:.0} height={:.0}",
            viewport.x, viewport.y, viewport.width, viewport.height
        );
        if !selection.is_empty() {
            let ids: Vec<String> = selection.iter().map(ToString::to_string).collect();
            text.push_str(&format!("\nSelected objects: {}", ids.join(", ")));
        }
        // Pure-creation prompts skip the snapshot to keep requests small.
        if references_existing(prompt, selection) {
            let objects = ctx.store.scan(&ctx.board).await?;
            text.push_str("\n\nBoard state:\n");
            text.push_str(&compact_snapshot(&objects, self.config.snapshot_cap));
        }
        Ok(text)
    }

    /// Execute one round of tool calls concurrently
    ///
    /// Isolable failures become failure results; anything else aborts.
    /// Also reports whether any call successfully mutated the board.
    async fn run_calls(
        &self,
        ctx: &ToolContext,
        calls: &[ToolCall],
        ledger: &mut ActionLedger,
    ) -> Result<(Vec<ToolResult>, bool), AgentError> {
        let outcomes = futures::future::join_all(calls.iter().map(|c| dispatch(ctx, c))).await;
        let mut results = Vec::with_capacity(calls.len());
        let mut mutated = false;
        for (call, outcome) in calls.iter().zip(outcomes) {
            match outcome {
                Ok(outcome) => {
                    mutated |= !outcome.read_only;
                    ledger.record(&call.name, &outcome);
                    results.push(ToolResult::success(&call.id, outcome.payload));
                }
                Err(err) if err.is_isolable() => {
                    tracing::warn!(tool = %call.name, %err, "tool call failed");
                    results.push(ToolResult::failure(&call.id, err.to_string()));
                }
                Err(err) => return Err(err),
            }
        }
        Ok((results, mutated))
    }

    /// Shortfall against an explicit requested count, if worth chasing
    fn creation_deficit(&self, prompt: &str, ledger: &ActionLedger) -> Option<usize> {
        static COUNTED: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\b(?:create|add|make|generate|place|draw)\s+(\d+)\b").unwrap()
        });
        // A text-only answer to a counted prompt still gets chased: zero
        // creations is the largest deficit, not an exemption.
        let requested: usize = COUNTED.captures(&prompt.to_lowercase())?.get(1)?.as_str().parse().ok()?;
        let deficit = requested.checked_sub(ledger.created)?;
        (deficit > 0 && deficit <= self.config.max_correction_deficit).then_some(deficit)
    }
}

/// What the loop did, for deterministic reply synthesis
#[derive(Debug, Default)]
struct ActionLedger {
    /// Mutating action label -> occurrence count, in stable order
    actions: BTreeMap<&'static str, usize>,
    /// Objects created across all calls
    created: usize,
}

impl ActionLedger {
    fn record(&mut self, tool: &str, outcome: &ToolOutcome) {
        if outcome.read_only {
            return;
        }
        self.created += outcome.created;
        let label = match tool {
            "execute_plan" => "Created objects",
            "create_sticky" => "Created a sticky note",
            "create_shape" => "Created a shape",
            "create_frame" => "Created a frame",
            "create_text" => "Created a text element",
            "create_sticker" => "Created a sticker",
            "create_connector" => "Created a connector",
            "move_object" => "Moved an object",
            "resize_object" => "Resized an object",
            "rotate_object" => "Rotated an object",
            "update_color" => "Recolored an object",
            "update_text" => "Updated text",
            "update_parent" => "Reparented an object",
            "delete_object" | "delete_objects" => "Deleted objects",
            "arrange_objects" => "Arranged objects",
            _ => "Updated the board",
        };
        *self.actions.entry(label).or_insert(0) += 1;
    }

    fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// `"Created objects (12), Moved an object x2."`
    fn summary(&self) -> String {
        let parts: Vec<String> = self
            .actions
            .iter()
            .map(|(label, count)| {
                if *label == "Created objects" && self.created > 0 {
                    format!("Created {} object(s)", self.created)
                } else if *count > 1 {
                    format!("{label} x{count}")
                } else {
                    (*label).to_string()
                }
            })
            .collect();
        format!("{}.", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(created: usize) -> ToolOutcome {
        ToolOutcome {
            read_only: false,
            created,
            payload: json!({}),
        }
    }

    #[test]
    fn ledger_aggregates_repeated_actions() {
        let mut ledger = ActionLedger::default();
        ledger.record("create_sticky", &outcome(1));
        ledger.record("create_sticky", &outcome(1));
        ledger.record("move_object", &outcome(0));
        assert_eq!(ledger.summary(), "Created a sticky note x2, Moved an object.");
    }

    #[test]
    fn ledger_reports_plan_totals() {
        let mut ledger = ActionLedger::default();
        ledger.record("execute_plan", &outcome(12));
        assert_eq!(ledger.summary(), "Created 12 object(s).");
    }

    #[test]
    fn read_only_outcomes_leave_no_trace() {
        let mut ledger = ActionLedger::default();
        ledger.record(
            "get_board_summary",
            &ToolOutcome {
                read_only: true,
                created: 0,
                payload: json!({}),
            },
        );
        assert!(ledger.is_empty());
    }
}
