//! Image-search collaborator boundary (GIF-backed stickers)
//!
//! Optional: a pipeline without an image searcher still works, it just
//! skips image-backed sticker ops with a partial-failure note.

use crate::error::AgentError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHit {
    /// Displayable image URL
    pub url: String,
    /// Smaller preview, when the provider has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

/// External image search
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// Ranked results for `query`, at most `limit`
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ImageHit>, AgentError>;
}
