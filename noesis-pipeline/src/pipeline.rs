//! ReasoningPipeline — Planning → Executing(i) → Combining → Done.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use noesis_core::config::PipelineConfig;
use noesis_core::errors::{NoesisResult, PipelineError};
use noesis_core::knowledge::ConstructedKnowledge;
use noesis_core::models::{ReasoningTrace, StepKind, Uncertainty};
use noesis_core::traits::IGenerator;

use crate::handler::{StepContext, StepHandler};
use crate::plan;
use crate::registry::HandlerRegistry;

/// Sequential multi-step reasoning over constructed knowledge.
///
/// Steps execute strictly in plan order; step *i+1* can read the results
/// of steps `0..i` through its context. The trace is append-only while
/// the pipeline runs and frozen once returned. Dropping the `run` future
/// cancels the in-flight step and prevents the next one from starting.
pub struct ReasoningPipeline {
    registry: HandlerRegistry,
    generator: Arc<dyn IGenerator>,
    config: PipelineConfig,
}

impl ReasoningPipeline {
    pub fn new(generator: Arc<dyn IGenerator>, config: PipelineConfig) -> Self {
        Self {
            registry: HandlerRegistry::with_defaults(),
            generator,
            config,
        }
    }

    /// Register a handler for an additional step kind.
    pub fn register_handler(&mut self, kind: StepKind, handler: Box<dyn StepHandler>) {
        self.registry.register(kind, handler);
    }

    /// Run the pipeline to completion.
    ///
    /// Always reaches `Done` unless a step raises a fatal error, which
    /// propagates without internal retry. Unknown step kinds do not fail:
    /// they complete at maximum uncertainty.
    pub async fn run(
        &self,
        query: &str,
        knowledge: &ConstructedKnowledge,
    ) -> NoesisResult<ReasoningTrace> {
        // Planning.
        let steps = plan::build_plan(query, knowledge, &self.config);
        if steps.is_empty() {
            return Err(PipelineError::EmptyPlan.into());
        }
        debug!(steps = steps.len(), "reasoning plan ready");

        // Executing.
        let generator_timeout = Duration::from_millis(self.config.generator_timeout_ms);
        let mut executed = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            let ctx = StepContext {
                query,
                executed: &executed,
                generator: &self.generator,
                generator_timeout,
            };
            let outcome = self.registry.execute(step, &ctx).await?;
            debug!(
                index,
                kind = %outcome.kind,
                uncertainty = %outcome.uncertainty,
                "step executed"
            );
            executed.push(outcome);
        }

        // Combining: noisy-OR over step uncertainties, newline-joined text.
        let overall_uncertainty = Uncertainty::noisy_or(executed.iter().map(|s| s.uncertainty));
        let reasoning = executed
            .iter()
            .map(|s| s.result.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        debug!(%overall_uncertainty, "reasoning complete");

        // Done.
        Ok(ReasoningTrace {
            steps: executed,
            reasoning,
            overall_uncertainty,
        })
    }
}
