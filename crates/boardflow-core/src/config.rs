//! Agent configuration

use boardflow_types::Rect;

/// Tunables for the command pipeline
///
/// Defaults match production behavior; tests override via the `with_*`
/// builders.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Maximum reasoning rounds per request
    pub max_rounds: usize,
    /// Largest deficit the quantity-correction pass will chase
    pub max_correction_deficit: usize,
    /// Objects included in a compacted board snapshot before truncation
    pub snapshot_cap: usize,
    /// Cell size of the fallback placement grid for coordinate-less ops
    pub fallback_cell: f64,
    /// Viewport assumed when the caller supplies none
    pub default_viewport: Rect,
    /// Gap used by recipe layouts
    pub spacing: f64,
}

impl AgentConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom round bound
    #[inline]
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// With a custom snapshot cap
    #[inline]
    #[must_use]
    pub fn with_snapshot_cap(mut self, cap: usize) -> Self {
        self.snapshot_cap = cap;
        self
    }

    /// With a custom default viewport
    #[inline]
    #[must_use]
    pub fn with_default_viewport(mut self, viewport: Rect) -> Self {
        self.default_viewport = viewport;
        self
    }

    /// With a custom recipe spacing
    #[inline]
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            max_correction_deficit: 500,
            snapshot_cap: 200,
            fallback_cell: 220.0,
            default_viewport: Rect::new(0.0, 0.0, 1600.0, 1000.0),
            spacing: 20.0,
        }
    }
}
