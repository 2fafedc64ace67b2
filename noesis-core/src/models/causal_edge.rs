use serde::{Deserialize, Serialize};

use super::Entity;

/// A directed causal relationship with an online-learned strength.
///
/// Keyed by `(source, target)` — at most one edge per ordered pair.
/// `strength` stays within [0.0, 1.0] because the EMA update is a convex
/// combination of in-range values; it is only ever mutated through
/// `CausalLinkTracker::record_observation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub source: Entity,
    pub target: Entity,
    /// Learned estimate of how strongly `source` causes `target`.
    pub strength: f64,
    /// Number of observations folded into `strength`.
    pub observation_count: u64,
}
