//! Mock capability implementations shared by integration tests across the
//! Noesis workspace: scripted seeders, table-driven scorers, and canned
//! generators.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use noesis_core::errors::{NoesisResult, PipelineError, StoreError};
use noesis_core::knowledge::{ConstructedKnowledge, Fact};
use noesis_core::models::{Entity, ScoredNode, StepKind, Uncertainty};
use noesis_core::traits::{IEntitySeeder, IGenerator, IGraphStore, IPathScorer};

/// Seeder returning a fixed entity list.
pub struct StaticSeeder {
    entities: Vec<Entity>,
}

impl StaticSeeder {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entities: Vec<Entity> = Vec::new();
        for id in ids {
            let entity = Entity::new(id);
            if !entities.contains(&entity) {
                entities.push(entity);
            }
        }
        Self { entities }
    }

    /// A seeder that yields no entities.
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

#[async_trait]
impl IEntitySeeder for StaticSeeder {
    async fn initial_entities(&self, _query: &str) -> NoesisResult<Vec<Entity>> {
        Ok(self.entities.clone())
    }
}

/// Scorer backed by a fixed path → score table.
///
/// Paths are keyed by their entity ids joined with `/`. Unknown paths
/// score 0.0.
pub struct TableScorer {
    scores: HashMap<String, f64>,
    /// Optional artificial latency, for timeout tests.
    delay: Option<Duration>,
}

impl TableScorer {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            scores: entries
                .into_iter()
                .map(|(path, score)| (path.into(), score))
                .collect(),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn path_key(path: &[Entity]) -> String {
        path.iter()
            .map(Entity::as_str)
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[async_trait]
impl IPathScorer for TableScorer {
    async fn score_path(&self, _query: &str, path: &[Entity]) -> NoesisResult<f64> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self
            .scores
            .get(&Self::path_key(path))
            .copied()
            .unwrap_or(0.0))
    }
}

/// Scorer that always fails, for exclusion-path tests.
pub struct FailingScorer;

#[async_trait]
impl IPathScorer for FailingScorer {
    async fn score_path(&self, _query: &str, _path: &[Entity]) -> NoesisResult<f64> {
        Err(StoreError::Unavailable {
            reason: "scorer backend down".to_string(),
        }
        .into())
    }
}

/// Graph store whose calls hang for a fixed delay, for store-timeout
/// tests.
pub struct SlowStore {
    delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl IGraphStore for SlowStore {
    async fn query_at_time(
        &self,
        _query: &str,
        _k: usize,
        _timestamp: Option<DateTime<Utc>>,
    ) -> NoesisResult<Vec<ScoredNode>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }

    async fn neighbors(&self, _entity: &Entity) -> NoesisResult<Vec<Entity>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

/// Graph store whose backend is unreachable, for error-propagation tests.
pub struct UnavailableStore;

#[async_trait]
impl IGraphStore for UnavailableStore {
    async fn query_at_time(
        &self,
        _query: &str,
        _k: usize,
        _timestamp: Option<DateTime<Utc>>,
    ) -> NoesisResult<Vec<ScoredNode>> {
        Err(StoreError::Unavailable {
            reason: "graph backend down".to_string(),
        }
        .into())
    }

    async fn neighbors(&self, _entity: &Entity) -> NoesisResult<Vec<Entity>> {
        Err(StoreError::Unavailable {
            reason: "graph backend down".to_string(),
        }
        .into())
    }
}

/// Generator returning a canned response regardless of prompt.
pub struct CannedGenerator {
    response: String,
}

impl CannedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl IGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str) -> NoesisResult<String> {
        Ok(self.response.clone())
    }
}

/// Generator that echoes the prompt back, for prompt-assembly assertions.
pub struct EchoGenerator;

#[async_trait]
impl IGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> NoesisResult<String> {
        Ok(prompt.to_string())
    }
}

/// Generator that always fails, for fatal-step tests.
pub struct FailingGenerator;

#[async_trait]
impl IGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> NoesisResult<String> {
        Err(PipelineError::GenerationFailed {
            kind: StepKind::SynthesizeAnswer,
            reason: "generation backend down".to_string(),
        }
        .into())
    }
}

/// Knowledge with one fact per given uncertainty.
pub fn knowledge_with_uncertainties(uncertainties: &[f64]) -> ConstructedKnowledge {
    ConstructedKnowledge::new(
        uncertainties
            .iter()
            .enumerate()
            .map(|(i, &u)| Fact {
                content: format!("fact {i}"),
                uncertainty: Uncertainty::new(u),
            })
            .collect(),
    )
}
