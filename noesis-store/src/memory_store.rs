//! MemoryGraphStore — DashMap-backed time-versioned node store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use noesis_core::errors::NoesisResult;
use noesis_core::models::{Entity, NodeVersion, ScoredNode, Uncertainty};
use noesis_core::traits::IGraphStore;

/// Thread-safe in-memory graph store.
///
/// Keeps an append-only version vector per node (versions assigned
/// monotonically on insert) and a directed adjacency map. Full-text
/// matching is case-insensitive token overlap, which is enough to exercise
/// the point-in-time query contract.
pub struct MemoryGraphStore {
    versions: DashMap<Entity, Vec<NodeVersion>>,
    adjacency: DashMap<Entity, Vec<Entity>>,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
            adjacency: DashMap::new(),
        }
    }

    /// Append a new version of a node, assigning the next version number.
    ///
    /// Returns the version number assigned.
    pub fn insert_version(
        &self,
        node_id: Entity,
        content: impl Into<String>,
        uncertainty: Uncertainty,
        timestamp: DateTime<Utc>,
    ) -> u64 {
        let mut entry = self.versions.entry(node_id.clone()).or_default();
        let version = entry.last().map(|v| v.version + 1).unwrap_or(1);
        entry.push(NodeVersion {
            node_id,
            content: content.into(),
            uncertainty,
            timestamp,
            version,
        });
        version
    }

    /// Add a directed edge. Duplicate edges are ignored.
    pub fn add_edge(&self, source: Entity, target: Entity) {
        let mut entry = self.adjacency.entry(source).or_default();
        if !entry.contains(&target) {
            entry.push(target);
        }
    }

    /// Number of nodes with at least one version.
    pub fn node_count(&self) -> usize {
        self.versions.len()
    }

    /// Latest version by timestamp eligible at `timestamp` (latest overall
    /// when `timestamp` is `None`). Selection is by timestamp, not
    /// insertion order.
    fn select_version(
        versions: &[NodeVersion],
        timestamp: Option<DateTime<Utc>>,
    ) -> Option<NodeVersion> {
        match timestamp {
            Some(t) => versions
                .iter()
                .filter(|v| v.timestamp <= t)
                .max_by_key(|v| v.timestamp)
                .cloned(),
            None => versions.iter().max_by_key(|v| v.timestamp).cloned(),
        }
    }

    /// Token-overlap score between query and content, 0.0 when disjoint.
    fn overlap_score(query: &str, content: &str) -> f64 {
        let query_tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if query_tokens.is_empty() {
            return 0.0;
        }
        let content_lower = content.to_lowercase();
        let content_tokens: std::collections::HashSet<&str> =
            content_lower.split_whitespace().collect();

        let matches = query_tokens
            .iter()
            .filter(|t| content_tokens.contains(t.as_str()))
            .count();
        matches as f64 / query_tokens.len() as f64
    }
}

impl Default for MemoryGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IGraphStore for MemoryGraphStore {
    async fn query_at_time(
        &self,
        query: &str,
        k: usize,
        timestamp: Option<DateTime<Utc>>,
    ) -> NoesisResult<Vec<ScoredNode>> {
        let mut results: Vec<ScoredNode> = self
            .versions
            .iter()
            .filter_map(|entry| {
                let version = Self::select_version(entry.value(), timestamp)?;
                let score = Self::overlap_score(query, &version.content);
                (score > 0.0).then_some(ScoredNode {
                    node: version,
                    score,
                })
            })
            .collect();

        // Primary: timestamp descending. Ties: score descending.
        results.sort_by(|a, b| {
            b.node
                .timestamp
                .cmp(&a.node.timestamp)
                .then_with(|| {
                    b.score
                        .partial_cmp(&a.score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.node.node_id.cmp(&b.node.node_id))
        });
        results.truncate(k);
        Ok(results)
    }

    async fn neighbors(&self, entity: &Entity) -> NoesisResult<Vec<Entity>> {
        let mut out = self
            .adjacency
            .get(entity)
            .map(|r| r.clone())
            .unwrap_or_default();
        out.sort();
        Ok(out)
    }
}
