//! Reasoning-service collaborator boundary
//!
//! The service is specified only at its interface: one request/response
//! call that, given a system prompt, tool schemas and a message history,
//! returns either final text or a set of structured tool invocations.
//! Tool results are fed back keyed by invocation id.

use crate::error::AgentError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One tool invocation returned by the reasoning service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Invocation id, echoed back with the result
    pub id: String,
    /// Tool name
    pub name: String,
    /// Structured arguments
    pub args: Value,
}

/// Result of one tool invocation, fed back to the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Invocation id this result answers
    pub call_id: String,
    /// False when the call failed and `payload` describes the error
    pub ok: bool,
    /// Tool output or structured error
    pub payload: Value,
}

impl ToolResult {
    /// Successful result
    #[inline]
    #[must_use]
    pub fn success(call_id: impl Into<String>, payload: Value) -> Self {
        Self {
            call_id: call_id.into(),
            ok: true,
            payload,
        }
    }

    /// Failed result; the error becomes data, never a request failure
    #[inline]
    #[must_use]
    pub fn failure(call_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            ok: false,
            payload: serde_json::json!({ "error": message.into() }),
        }
    }
}

/// Message history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum ChatMessage {
    User { text: String },
    Assistant {
        text: Option<String>,
        calls: Vec<ToolCall>,
    },
    ToolResults { results: Vec<ToolResult> },
}

/// Declared schema of one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    /// JSON Schema of the arguments object
    pub parameters: Value,
}

/// One reasoning-service request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningRequest {
    pub system: String,
    pub tools: Vec<ToolSchema>,
    pub messages: Vec<ChatMessage>,
}

/// Reasoning-service response: final text, tool calls, or both
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReasoningReply {
    pub text: Option<String>,
    pub calls: Vec<ToolCall>,
}

/// The external reasoning service
///
/// Injected rather than constructed ambiently so tests can script it and
/// hosts can manage its lifecycle.
#[async_trait]
pub trait ReasoningService: Send + Sync {
    /// One request/response round
    async fn complete(&self, request: ReasoningRequest) -> Result<ReasoningReply, AgentError>;
}
