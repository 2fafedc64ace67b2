use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::StepKind;

/// Reasoning pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Ordered step plan. An empty list falls back to the default plan.
    pub plan: Vec<StepKind>,
    /// Nodes fetched per point-in-time retrieval in
    /// `reason_with_uncertainty`.
    pub retrieval_k: usize,
    /// Per-call generator timeout (milliseconds).
    pub generator_timeout_ms: u64,
}

impl PipelineConfig {
    /// The default step plan: interpret, analyze, synthesize.
    pub fn default_plan() -> Vec<StepKind> {
        vec![
            StepKind::InterpretQuery,
            StepKind::AnalyzeKnowledge,
            StepKind::SynthesizeAnswer,
        ]
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            plan: Self::default_plan(),
            retrieval_k: defaults::DEFAULT_RETRIEVAL_K,
            generator_timeout_ms: defaults::DEFAULT_GENERATOR_TIMEOUT_MS,
        }
    }
}
