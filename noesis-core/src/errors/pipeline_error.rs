use crate::models::StepKind;

/// Reasoning pipeline errors.
///
/// Scoring timeouts and unknown step kinds are deliberately absent: both
/// degrade the result (candidate exclusion, maximum step uncertainty)
/// instead of failing the invocation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Free-text generation failed during a step. Fatal for the invocation.
    #[error("generation failed in step {kind}: {reason}")]
    GenerationFailed { kind: StepKind, reason: String },

    /// The planner produced no steps. Defensive; the default plan is
    /// substituted before this can normally occur.
    #[error("reasoning plan is empty")]
    EmptyPlan,
}
