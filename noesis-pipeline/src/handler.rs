//! Step handler seam — one handler per step kind.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use noesis_core::errors::NoesisResult;
use noesis_core::models::{ExecutedStep, ReasoningStep};
use noesis_core::traits::IGenerator;

/// Read-only context a handler sees while executing step *i*.
pub struct StepContext<'a> {
    pub query: &'a str,
    /// Results of steps `0..i`, in execution order.
    pub executed: &'a [ExecutedStep],
    pub generator: &'a Arc<dyn IGenerator>,
    pub generator_timeout: Duration,
}

/// Executes one kind of reasoning step and estimates its uncertainty.
///
/// Handlers are registered per `StepKind` in the `HandlerRegistry`;
/// a kind with no handler is executed by a conservative fallback rather
/// than failing the pipeline.
#[async_trait]
pub trait StepHandler: Send + Sync {
    async fn execute(
        &self,
        step: &ReasoningStep,
        ctx: &StepContext<'_>,
    ) -> NoesisResult<ExecutedStep>;
}
