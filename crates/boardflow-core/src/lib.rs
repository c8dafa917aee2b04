//! Boardflow Core - command-to-mutation pipeline
//!
//! Translates a natural-language or structured command into concrete,
//! atomic mutations against the shared document store:
//!
//! - [`classify`] turns text into a deterministic recipe when a known
//!   pattern matches, avoiding a reasoning-service round-trip.
//! - [`PlanExecutor`] executes ordered operation lists with identity
//!   pre-allocation, forward-reference resolution, auto-parenting and
//!   chunked atomic commits.
//! - [`CanvasAgent`] is the single entry point a UI layer needs: it runs
//!   the bounded tool-calling loop against an injected
//!   [`ReasoningService`], dispatching tool calls back into the same
//!   mutation primitives the deterministic path uses.
//!
//! Both paths bottom out in the same plan/mutation code, so every write
//! obeys identical invariants regardless of who asked for it.

pub mod agent;
pub mod classify;
pub mod config;
pub mod error;
pub mod images;
mod mutate;
pub mod plan;
pub mod reasoning;
mod recipes;
pub mod snapshot;
pub mod tools;

pub use agent::CanvasAgent;
pub use classify::{classify, Recipe, SingleKind, TemplateKind};
pub use config::AgentConfig;
pub use error::AgentError;
pub use images::{ImageHit, ImageSearch};
pub use plan::{OpSpec, PlanExecutor, PlanOp, PlanOutcome};
pub use reasoning::{
    ChatMessage, ReasoningReply, ReasoningRequest, ReasoningService, ToolCall, ToolResult,
    ToolSchema,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
