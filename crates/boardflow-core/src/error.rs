//! Error types for the command pipeline
//!
//! Most failures are recovered locally and turned into data (structured
//! tool results, partial-failure notes). Only a reasoning-service failure
//! or a top-level invalid input changes the terminal status of a request.

use boardflow_store::StoreError;
use boardflow_types::ObjectId;

/// Main pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// Malformed or missing required tool arguments
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Referenced object id absent
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// Optional collaborator failure (image search); isolated per-op
    #[error("external service failure: {0}")]
    External(String),

    /// Reasoning-service call failed; fatal to the request
    #[error("reasoning service failure: {0}")]
    Reasoning(String),

    /// Document store failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Layout engine rejected its parameters
    #[error("layout error: {0}")]
    Layout(#[from] boardflow_layout::LayoutError),
}

impl AgentError {
    /// True when the failure can be confined to one tool call or plan op
    ///
    /// Isolable failures are fed back to the reasoning service as data;
    /// the rest terminate the request.
    #[inline]
    #[must_use]
    pub fn is_isolable(&self) -> bool {
        !matches!(self, AgentError::Reasoning(_))
    }

    /// Short, user-safe status message (never a stack trace)
    #[must_use]
    pub fn status_message(&self) -> String {
        match self {
            AgentError::InvalidInput(m) => format!("That request was missing something: {m}"),
            AgentError::NotFound(id) => format!("Couldn't find object {id} on the board."),
            AgentError::External(_) => "An external service was unavailable.".to_string(),
            AgentError::Reasoning(_) => "The assistant couldn't process that request.".to_string(),
            AgentError::Store(_) => "The board couldn't be updated right now.".to_string(),
            AgentError::Layout(m) => format!("Layout parameters were invalid: {m}"),
        }
    }
}
