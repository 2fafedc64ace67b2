use serde::{Deserialize, Serialize};

use super::{StepKind, Uncertainty};

/// The outcome of executing one reasoning step. Produced once, immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutedStep {
    pub kind: StepKind,
    pub result: String,
    pub uncertainty: Uncertainty,
}

/// Full record of one reasoning invocation.
///
/// Owned exclusively by the invocation that produced it; append-only while
/// the pipeline runs and frozen once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTrace {
    /// Executed steps in plan order.
    pub steps: Vec<ExecutedStep>,
    /// Newline-joined step results.
    pub reasoning: String,
    /// Noisy-OR combination of all step uncertainties.
    pub overall_uncertainty: Uncertainty,
}
