//! ReasoningEngine — top-level orchestrator consumed by the surrounding
//! agent layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::timeout;
use tracing::{debug, info};

use noesis_causal::CausalLinkTracker;
use noesis_core::config::NoesisConfig;
use noesis_core::errors::{NoesisResult, StoreError};
use noesis_core::knowledge::ConstructedKnowledge;
use noesis_core::models::{
    Beam, CausalEdge, Entity, ExecutedStep, ReasoningOutcome, ReasoningTrace, ScoredNode, StepKind,
};
use noesis_core::traits::{IEntitySeeder, IGenerator, IGraphStore, IPathScorer};
use noesis_search::BeamPathSearch;

use crate::attribution::UncertaintyAttributionAnalyzer;
use crate::pipeline::ReasoningPipeline;

/// Uncertainty-aware temporal graph reasoner.
///
/// Wires the injected capabilities (graph store, path scorer, entity
/// seeder, generator) into the pipeline, beam search, causal tracker, and
/// attribution analyzer, and exposes the operations the orchestration
/// layer consumes.
pub struct ReasoningEngine {
    store: Arc<dyn IGraphStore>,
    pipeline: ReasoningPipeline,
    search: BeamPathSearch,
    tracker: Arc<CausalLinkTracker>,
    analyzer: UncertaintyAttributionAnalyzer,
    config: NoesisConfig,
}

impl ReasoningEngine {
    pub fn new(
        store: Arc<dyn IGraphStore>,
        scorer: Arc<dyn IPathScorer>,
        seeder: Arc<dyn IEntitySeeder>,
        generator: Arc<dyn IGenerator>,
        config: NoesisConfig,
    ) -> Self {
        let search = BeamPathSearch::new(
            Arc::clone(&store),
            scorer,
            seeder,
            config.search.clone(),
        );
        let pipeline = ReasoningPipeline::new(generator, config.pipeline.clone());
        Self {
            store,
            pipeline,
            search,
            tracker: Arc::new(CausalLinkTracker::new()),
            analyzer: UncertaintyAttributionAnalyzer::new(),
            config,
        }
    }

    /// Reason over retrieved facts and activated knowledge.
    ///
    /// `activated_knowledge` keys are reported in map iteration order;
    /// the first 5 become `activated_concepts`, and the content of the
    /// top 3 retrieved items becomes `supporting_evidence`.
    pub async fn reason(
        &self,
        query: &str,
        retrieved_info: &[ScoredNode],
        activated_knowledge: &serde_json::Map<String, serde_json::Value>,
    ) -> NoesisResult<ReasoningOutcome> {
        let knowledge = ConstructedKnowledge::from_retrieved(retrieved_info);
        let trace = self.pipeline.run(query, &knowledge).await?;

        let conclusion = trace
            .steps
            .last()
            .map(|s| s.result.clone())
            .unwrap_or_else(|| trace.reasoning.clone());

        info!(
            uncertainty = %trace.overall_uncertainty,
            steps = trace.steps.len(),
            "reasoning finished"
        );

        Ok(ReasoningOutcome {
            query: query.to_string(),
            conclusion,
            confidence: trace.overall_uncertainty.confidence(),
            uncertainty: trace.overall_uncertainty,
            supporting_evidence: retrieved_info
                .iter()
                .take(3)
                .map(|r| r.node.content.clone())
                .collect(),
            activated_concepts: activated_knowledge.keys().take(5).cloned().collect(),
        })
    }

    /// Reason with full uncertainty tracking, supplementing the supplied
    /// knowledge with a point-in-time fetch from the graph store.
    ///
    /// Only store-level failures abort the invocation; everything else
    /// degrades into higher uncertainty.
    pub async fn reason_with_uncertainty(
        &self,
        query: &str,
        mut constructed_knowledge: ConstructedKnowledge,
        timestamp: Option<DateTime<Utc>>,
    ) -> NoesisResult<ReasoningTrace> {
        let store_timeout = Duration::from_millis(self.config.search.store_timeout_ms);
        let fetched = timeout(
            store_timeout,
            self.store
                .query_at_time(query, self.config.pipeline.retrieval_k, timestamp),
        )
        .await
        .map_err(|_| StoreError::Timeout {
            elapsed_ms: store_timeout.as_millis() as u64,
        })??;

        debug!(fetched = fetched.len(), "supplemented knowledge from temporal store");
        constructed_knowledge.extend_from_retrieved(&fetched);

        self.pipeline.run(query, &constructed_knowledge).await
    }

    /// Explore candidate reasoning paths for a query.
    pub async fn search_paths(
        &self,
        query: &str,
        beam_width: usize,
        max_depth: usize,
    ) -> NoesisResult<Vec<Beam>> {
        self.search.search(query, beam_width, max_depth).await
    }

    /// Fire-and-forget causal strength update.
    pub fn record_observation(
        &self,
        source: &Entity,
        target: &Entity,
        observed_probability: f64,
    ) -> CausalEdge {
        self.tracker
            .record_observation(source, target, observed_probability)
    }

    /// Decompose a trace's uncertainty into per-kind contributions.
    pub fn attribute(&self, steps: &[ExecutedStep]) -> HashMap<StepKind, f64> {
        self.analyzer.attribute(steps)
    }

    /// Remediation suggestions for the dominant uncertainty sources.
    pub fn suggest(&self, contributions: &HashMap<StepKind, f64>) -> Vec<String> {
        self.analyzer.suggest(contributions)
    }

    /// The shared causal tracker (process-wide edge table).
    pub fn tracker(&self) -> &Arc<CausalLinkTracker> {
        &self.tracker
    }

    /// Register a handler for an additional step kind.
    pub fn register_handler(
        &mut self,
        kind: StepKind,
        handler: Box<dyn crate::handler::StepHandler>,
    ) {
        self.pipeline.register_handler(kind, handler);
    }
}
