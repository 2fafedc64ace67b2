use async_trait::async_trait;

use crate::errors::NoesisResult;
use crate::models::Entity;

/// Entity seeding for beam search, backed by retrieval/NLP outside this
/// core.
#[async_trait]
pub trait IEntitySeeder: Send + Sync {
    /// Initial entities for a query, deduplicated, in the seeder's own
    /// order. May be empty; an empty seed set makes the search return an
    /// empty result rather than fail.
    async fn initial_entities(&self, query: &str) -> NoesisResult<Vec<Entity>>;
}
