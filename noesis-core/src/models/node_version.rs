use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, Uncertainty};

/// Immutable snapshot of a graph node at a point in time.
///
/// A new version is created whenever the node's content changes; versions
/// are never mutated afterwards. `version` is strictly increasing per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeVersion {
    pub node_id: Entity,
    pub content: String,
    pub uncertainty: Uncertainty,
    pub timestamp: DateTime<Utc>,
    pub version: u64,
}

/// A node version plus its retrieval score from a point-in-time query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNode {
    pub node: NodeVersion,
    pub score: f64,
}
