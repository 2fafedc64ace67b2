//! Handler registry and the built-in step handlers.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::warn;

use noesis_core::constants::{
    INTERPRET_QUERY_UNCERTAINTY, MISSING_FACTS_UNCERTAINTY, SYNTHESIZE_ANSWER_UNCERTAINTY,
    UNHANDLED_STEP_UNCERTAINTY,
};
use noesis_core::errors::{NoesisResult, PipelineError};
use noesis_core::models::{ExecutedStep, ReasoningStep, StepKind, Uncertainty};

use crate::handler::{StepContext, StepHandler};

/// Maps step kinds to their handlers.
///
/// Dispatch is over the `StepKind` sum type; callers extend the table with
/// `register` instead of the pipeline growing conditional chains. A step
/// whose kind has no entry is executed by a conservative fallback that
/// assigns maximum uncertainty, so the pipeline completes and flags low
/// confidence instead of aborting.
pub struct HandlerRegistry {
    handlers: HashMap<StepKind, Box<dyn StepHandler>>,
}

impl HandlerRegistry {
    /// Registry with the three built-in handlers.
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
        };
        registry.register(StepKind::InterpretQuery, Box::new(InterpretQueryHandler));
        registry.register(StepKind::AnalyzeKnowledge, Box::new(AnalyzeKnowledgeHandler));
        registry.register(StepKind::SynthesizeAnswer, Box::new(SynthesizeAnswerHandler));
        registry
    }

    /// Register (or replace) the handler for a step kind.
    pub fn register(&mut self, kind: StepKind, handler: Box<dyn StepHandler>) {
        self.handlers.insert(kind, handler);
    }

    /// Execute a step through its registered handler, or the fallback.
    pub async fn execute(
        &self,
        step: &ReasoningStep,
        ctx: &StepContext<'_>,
    ) -> NoesisResult<ExecutedStep> {
        let kind = step.kind();
        match self.handlers.get(&kind) {
            Some(handler) => handler.execute(step, ctx).await,
            None => {
                warn!(%kind, "no handler registered; assigning maximum uncertainty");
                Ok(ExecutedStep {
                    result: format!("No handler for step '{kind}'"),
                    uncertainty: Uncertainty::new(UNHANDLED_STEP_UNCERTAINTY),
                    kind,
                })
            }
        }
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Restates the query. Fixed low uncertainty.
struct InterpretQueryHandler;

#[async_trait]
impl StepHandler for InterpretQueryHandler {
    async fn execute(
        &self,
        step: &ReasoningStep,
        ctx: &StepContext<'_>,
    ) -> NoesisResult<ExecutedStep> {
        let query = match step {
            ReasoningStep::InterpretQuery { query } => query.as_str(),
            _ => ctx.query,
        };
        Ok(ExecutedStep {
            kind: step.kind(),
            result: format!("Interpreted query: {query}"),
            uncertainty: Uncertainty::new(INTERPRET_QUERY_UNCERTAINTY),
        })
    }
}

/// Summarizes the assembled facts. Uncertainty is the mean fact
/// uncertainty, or 0.5 when no facts are present.
struct AnalyzeKnowledgeHandler;

#[async_trait]
impl StepHandler for AnalyzeKnowledgeHandler {
    async fn execute(
        &self,
        step: &ReasoningStep,
        _ctx: &StepContext<'_>,
    ) -> NoesisResult<ExecutedStep> {
        let (fact_count, uncertainty) = match step {
            ReasoningStep::AnalyzeKnowledge { knowledge } => (
                knowledge.relevant_facts.len(),
                knowledge
                    .mean_fact_uncertainty()
                    .unwrap_or(Uncertainty::new(MISSING_FACTS_UNCERTAINTY)),
            ),
            _ => (0, Uncertainty::new(MISSING_FACTS_UNCERTAINTY)),
        };
        Ok(ExecutedStep {
            kind: step.kind(),
            result: format!(
                "Analyzed {fact_count} relevant facts (mean uncertainty {uncertainty})"
            ),
            uncertainty,
        })
    }
}

/// Synthesizes the final answer through the injected generator.
/// Fixed moderate uncertainty; generation failure is fatal for the
/// invocation.
struct SynthesizeAnswerHandler;

#[async_trait]
impl StepHandler for SynthesizeAnswerHandler {
    async fn execute(
        &self,
        step: &ReasoningStep,
        ctx: &StepContext<'_>,
    ) -> NoesisResult<ExecutedStep> {
        let prior = ctx
            .executed
            .iter()
            .map(|s| s.result.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = format!(
            "Query: {}\n\nReasoning so far:\n{}\n\nSynthesize a final answer.",
            ctx.query, prior
        );

        let generated = match timeout(ctx.generator_timeout, ctx.generator.generate(&prompt)).await
        {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                return Err(PipelineError::GenerationFailed {
                    kind: step.kind(),
                    reason: err.to_string(),
                }
                .into())
            }
            Err(_) => {
                return Err(PipelineError::GenerationFailed {
                    kind: step.kind(),
                    reason: format!(
                        "timed out after {}ms",
                        ctx.generator_timeout.as_millis()
                    ),
                }
                .into())
            }
        };

        Ok(ExecutedStep {
            kind: step.kind(),
            result: generated,
            uncertainty: Uncertainty::new(SYNTHESIZE_ANSWER_UNCERTAINTY),
        })
    }
}
