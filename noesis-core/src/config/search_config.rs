use serde::{Deserialize, Serialize};

use super::defaults;

/// Beam search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of beams retained per depth.
    pub beam_width: usize,
    /// Number of expansion iterations.
    pub max_depth: usize,
    /// Worker bound for concurrent scoring within one depth.
    pub score_concurrency: usize,
    /// Per-call scorer timeout (milliseconds). A timed-out candidate is
    /// excluded from the beam, not retried.
    pub scorer_timeout_ms: u64,
    /// Per-call graph store timeout (milliseconds). Timing out fails the
    /// whole search invocation.
    pub store_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: defaults::DEFAULT_BEAM_WIDTH,
            max_depth: defaults::DEFAULT_MAX_DEPTH,
            score_concurrency: defaults::DEFAULT_SCORE_CONCURRENCY,
            scorer_timeout_ms: defaults::DEFAULT_SCORER_TIMEOUT_MS,
            store_timeout_ms: defaults::DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}
