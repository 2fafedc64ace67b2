use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::NoesisResult;
use crate::models::{Entity, ScoredNode};

/// Point-in-time access to the time-versioned knowledge graph.
///
/// Backed by an external graph database in production; `noesis-store`
/// provides an in-memory reference implementation.
#[async_trait]
pub trait IGraphStore: Send + Sync {
    /// Full-text query against node versions valid at `timestamp`.
    ///
    /// When `timestamp` is given, only versions with
    /// `version.timestamp <= timestamp` are eligible; when omitted, the
    /// latest version of each matching node is eligible. Results are
    /// ordered by `(timestamp desc, score desc)` and capped at `k`.
    /// Fails with `StoreError::Unavailable` when the backend cannot be
    /// reached; retry is the caller's responsibility.
    async fn query_at_time(
        &self,
        query: &str,
        k: usize,
        timestamp: Option<DateTime<Utc>>,
    ) -> NoesisResult<Vec<ScoredNode>>;

    /// Outgoing neighbors of an entity, sorted and deduplicated so that
    /// beam expansion order is deterministic. An entity with no outgoing
    /// edges yields an empty vec, not an error.
    async fn neighbors(&self, entity: &Entity) -> NoesisResult<Vec<Entity>>;
}
