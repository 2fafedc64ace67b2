//! CausalLinkTracker — concurrent per-edge access via DashMap.

use dashmap::DashMap;
use tracing::debug;

use noesis_core::constants::CAUSAL_LEARNING_RATE;
use noesis_core::models::{CausalEdge, Entity};

/// Thread-safe tracker for causal edge strengths.
///
/// The edge table is shared across concurrent reasoning invocations.
/// Updates to the same `(source, target)` key are linearized by the
/// DashMap entry lock, so the read-modify-write EMA never loses updates;
/// updates to different keys proceed in parallel. No operation spans more
/// than one edge.
pub struct CausalLinkTracker {
    edges: DashMap<(Entity, Entity), CausalEdge>,
}

impl CausalLinkTracker {
    pub fn new() -> Self {
        Self {
            edges: DashMap::new(),
        }
    }

    /// Record an observed outcome for the `(source, target)` edge.
    ///
    /// EMA update with fixed learning rate α = 0.1:
    /// `strength' = (1 - α) · strength + α · observed`.
    /// A previously unseen edge is created on demand with
    /// `strength = observed` and a count of 1. `observed` is clamped to
    /// [0, 1], which keeps strength in [0, 1] (convex combination).
    ///
    /// Returns a snapshot of the edge after the update.
    pub fn record_observation(
        &self,
        source: &Entity,
        target: &Entity,
        observed_probability: f64,
    ) -> CausalEdge {
        let observed = observed_probability.clamp(0.0, 1.0);
        let key = (source.clone(), target.clone());

        // Entry holds the shard write lock for the whole read-modify-write.
        let updated = match self.edges.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(mut entry) => {
                let edge = entry.get_mut();
                edge.strength =
                    (1.0 - CAUSAL_LEARNING_RATE) * edge.strength + CAUSAL_LEARNING_RATE * observed;
                edge.observation_count += 1;
                edge.clone()
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => entry
                .insert(CausalEdge {
                    source: source.clone(),
                    target: target.clone(),
                    strength: observed,
                    observation_count: 1,
                })
                .clone(),
        };

        debug!(
            source = %updated.source,
            target = %updated.target,
            strength = updated.strength,
            observations = updated.observation_count,
            "recorded causal observation"
        );
        updated
    }

    /// Current state of one edge (cloned snapshot).
    pub fn edge(&self, source: &Entity, target: &Entity) -> Option<CausalEdge> {
        self.edges
            .get(&(source.clone(), target.clone()))
            .map(|r| r.clone())
    }

    /// All edges leaving `source`, sorted by target for determinism.
    pub fn edges_from(&self, source: &Entity) -> Vec<CausalEdge> {
        let mut out: Vec<CausalEdge> = self
            .edges
            .iter()
            .filter(|r| &r.key().0 == source)
            .map(|r| r.value().clone())
            .collect();
        out.sort_by(|a, b| a.target.cmp(&b.target));
        out
    }

    /// Snapshot of the whole edge table, sorted by key.
    pub fn snapshot(&self) -> Vec<CausalEdge> {
        let mut out: Vec<CausalEdge> = self.edges.iter().map(|r| r.value().clone()).collect();
        out.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
        out
    }

    /// Number of tracked edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Default for CausalLinkTracker {
    fn default() -> Self {
        Self::new()
    }
}
