//! BeamPathSearch — orchestrates seeding, expansion, and scoring.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use noesis_core::config::SearchConfig;
use noesis_core::errors::NoesisResult;
use noesis_core::models::Beam;
use noesis_core::traits::{IEntitySeeder, IGraphStore, IPathScorer};

use crate::expansion;

/// Scored, width-bounded graph traversal.
///
/// Dropping the future returned by [`search`](Self::search) cancels all
/// in-flight scorer and store calls and prevents the next depth from
/// starting.
pub struct BeamPathSearch {
    store: Arc<dyn IGraphStore>,
    scorer: Arc<dyn IPathScorer>,
    seeder: Arc<dyn IEntitySeeder>,
    config: SearchConfig,
}

impl BeamPathSearch {
    pub fn new(
        store: Arc<dyn IGraphStore>,
        scorer: Arc<dyn IPathScorer>,
        seeder: Arc<dyn IEntitySeeder>,
        config: SearchConfig,
    ) -> Self {
        Self {
            store,
            scorer,
            seeder,
            config,
        }
    }

    /// Run beam search with the configured width and depth.
    pub async fn search_default(&self, query: &str) -> NoesisResult<Vec<Beam>> {
        self.search(query, self.config.beam_width, self.config.max_depth)
            .await
    }

    /// Run beam search.
    ///
    /// Seeds singleton beams from the entity seeder (an empty seed set
    /// yields an empty result, not an error), then performs exactly
    /// `max_depth` expansion iterations: every beam's frontier is expanded
    /// through `neighbors`, every candidate `path + [neighbor]` is scored,
    /// and the top `beam_width` candidates survive (stable sort, so equal
    /// scores keep generation order). The final beam set is returned
    /// sorted descending by score.
    pub async fn search(
        &self,
        query: &str,
        beam_width: usize,
        max_depth: usize,
    ) -> NoesisResult<Vec<Beam>> {
        let beam_width = beam_width.max(1);

        let seeds = self.seeder.initial_entities(query).await?;
        if seeds.is_empty() {
            debug!(query, "no initial entities; empty search result");
            return Ok(Vec::new());
        }
        let mut beams: Vec<Beam> = seeds.into_iter().map(Beam::seed).collect();

        let store_timeout = Duration::from_millis(self.config.store_timeout_ms);
        for depth in 0..max_depth {
            let candidates =
                expansion::expand_frontier(&self.store, &beams, store_timeout).await?;
            if candidates.is_empty() {
                debug!(depth, "frontier exhausted");
                beams.clear();
                break;
            }

            let generated = candidates.len();
            let mut scored = self.score_candidates(query, candidates).await;
            sort_descending(&mut scored);
            scored.truncate(beam_width);

            debug!(
                depth,
                generated,
                kept = scored.len(),
                "depth iteration complete"
            );
            beams = scored;
            if beams.is_empty() {
                break;
            }
        }

        sort_descending(&mut beams);
        Ok(beams)
    }

    /// Score candidate paths concurrently, bounded by the configured
    /// worker count.
    ///
    /// The `buffered` stream yields results in submission order, so the
    /// merge is deterministic regardless of completion order. A candidate
    /// whose scoring times out or fails is excluded, not retried.
    async fn score_candidates(&self, query: &str, candidates: Vec<Beam>) -> Vec<Beam> {
        let scorer_timeout = Duration::from_millis(self.config.scorer_timeout_ms);
        let concurrency = self.config.score_concurrency.max(1);

        let scores: Vec<Option<f64>> = stream::iter(candidates.iter())
            .map(|candidate| {
                let scorer = Arc::clone(&self.scorer);
                async move {
                    match tokio::time::timeout(
                        scorer_timeout,
                        scorer.score_path(query, &candidate.path),
                    )
                    .await
                    {
                        Ok(Ok(score)) => Some(score),
                        Ok(Err(err)) => {
                            warn!(error = %err, "path scoring failed; candidate excluded");
                            None
                        }
                        Err(_) => {
                            debug!(
                                timeout_ms = scorer_timeout.as_millis() as u64,
                                "path scoring timed out; candidate excluded"
                            );
                            None
                        }
                    }
                }
            })
            .buffered(concurrency)
            .collect()
            .await;

        candidates
            .into_iter()
            .zip(scores)
            .filter_map(|(candidate, score)| score.map(|score| Beam { score, ..candidate }))
            .collect()
    }
}

/// Stable descending sort by score.
fn sort_descending(beams: &mut [Beam]) {
    beams.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
