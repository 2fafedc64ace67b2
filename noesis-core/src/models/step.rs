use std::fmt;

use serde::{Deserialize, Serialize};

use crate::knowledge::ConstructedKnowledge;

/// Discriminant of a reasoning step, used as the handler-registry and
/// attribution key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    InterpretQuery,
    AnalyzeKnowledge,
    SynthesizeAnswer,
    /// An extension step kind registered by the caller.
    Custom(String),
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::InterpretQuery => f.write_str("interpret_query"),
            StepKind::AnalyzeKnowledge => f.write_str("analyze_knowledge"),
            StepKind::SynthesizeAnswer => f.write_str("synthesize_answer"),
            StepKind::Custom(name) => f.write_str(name),
        }
    }
}

/// A planned reasoning step. Each variant carries its own payload, so step
/// dispatch is over a sum type rather than string matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReasoningStep {
    InterpretQuery {
        query: String,
    },
    AnalyzeKnowledge {
        knowledge: ConstructedKnowledge,
    },
    SynthesizeAnswer,
    Custom {
        name: String,
        content: serde_json::Value,
    },
}

impl ReasoningStep {
    pub fn kind(&self) -> StepKind {
        match self {
            ReasoningStep::InterpretQuery { .. } => StepKind::InterpretQuery,
            ReasoningStep::AnalyzeKnowledge { .. } => StepKind::AnalyzeKnowledge,
            ReasoningStep::SynthesizeAnswer => StepKind::SynthesizeAnswer,
            ReasoningStep::Custom { name, .. } => StepKind::Custom(name.clone()),
        }
    }
}
