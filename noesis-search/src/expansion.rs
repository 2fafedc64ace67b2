//! Frontier expansion — candidate path generation for one depth.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use noesis_core::errors::{NoesisResult, StoreError};
use noesis_core::models::Beam;
use noesis_core::traits::IGraphStore;

/// Generate all unscored candidate beams for the current beam set.
///
/// Candidates are produced in deterministic order: beams in their current
/// ranking order, each beam's neighbors in the store's sorted order. This
/// generation order is the tie-break for equal scores later.
///
/// A store call that exceeds `store_timeout` is a hard failure for the
/// whole search invocation.
pub(crate) async fn expand_frontier(
    store: &Arc<dyn IGraphStore>,
    beams: &[Beam],
    store_timeout: Duration,
) -> NoesisResult<Vec<Beam>> {
    let mut candidates = Vec::new();

    for beam in beams {
        let Some(frontier) = beam.last() else {
            continue;
        };
        let neighbors = timeout(store_timeout, store.neighbors(frontier))
            .await
            .map_err(|_| StoreError::Timeout {
                elapsed_ms: store_timeout.as_millis() as u64,
            })??;

        for neighbor in neighbors {
            candidates.push(beam.extended(neighbor));
        }
    }

    Ok(candidates)
}
