use async_trait::async_trait;

use crate::errors::NoesisResult;
use crate::models::Entity;

/// Candidate-path scoring, backed by an external scoring model.
#[async_trait]
pub trait IPathScorer: Send + Sync {
    /// Score a candidate path for the query. Higher is better.
    async fn score_path(&self, query: &str, path: &[Entity]) -> NoesisResult<f64>;
}
