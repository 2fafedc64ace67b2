//! Step planning — turns the configured plan into concrete steps.

use noesis_core::config::PipelineConfig;
use noesis_core::knowledge::ConstructedKnowledge;
use noesis_core::models::{ReasoningStep, StepKind};

/// Build the ordered step list for a query.
///
/// Step kinds come from `PipelineConfig::plan`; an empty configured plan
/// falls back to the default `[interpret_query, analyze_knowledge,
/// synthesize_answer]`, so the result is never empty.
pub fn build_plan(
    query: &str,
    knowledge: &ConstructedKnowledge,
    config: &PipelineConfig,
) -> Vec<ReasoningStep> {
    let kinds = if config.plan.is_empty() {
        PipelineConfig::default_plan()
    } else {
        config.plan.clone()
    };

    kinds
        .into_iter()
        .map(|kind| match kind {
            StepKind::InterpretQuery => ReasoningStep::InterpretQuery {
                query: query.to_string(),
            },
            StepKind::AnalyzeKnowledge => ReasoningStep::AnalyzeKnowledge {
                knowledge: knowledge.clone(),
            },
            StepKind::SynthesizeAnswer => ReasoningStep::SynthesizeAnswer,
            StepKind::Custom(name) => ReasoningStep::Custom {
                name,
                content: serde_json::Value::Null,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_configured_plan_falls_back_to_default() {
        let config = PipelineConfig {
            plan: Vec::new(),
            ..PipelineConfig::default()
        };
        let plan = build_plan("q", &ConstructedKnowledge::default(), &config);

        let kinds: Vec<StepKind> = plan.iter().map(ReasoningStep::kind).collect();
        assert_eq!(kinds, PipelineConfig::default_plan());
    }

    #[test]
    fn configured_order_is_preserved() {
        let config = PipelineConfig {
            plan: vec![
                StepKind::AnalyzeKnowledge,
                StepKind::Custom("verify_claims".to_string()),
                StepKind::SynthesizeAnswer,
            ],
            ..PipelineConfig::default()
        };
        let plan = build_plan("q", &ConstructedKnowledge::default(), &config);

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[1].kind(), StepKind::Custom("verify_claims".to_string()));
    }
}
