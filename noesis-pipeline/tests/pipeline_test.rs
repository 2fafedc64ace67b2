//! Tests for the reasoning pipeline.

use std::sync::Arc;

use async_trait::async_trait;

use noesis_core::config::PipelineConfig;
use noesis_core::errors::{NoesisError, NoesisResult, PipelineError};
use noesis_core::knowledge::ConstructedKnowledge;
use noesis_core::models::{ExecutedStep, ReasoningStep, StepKind, Uncertainty};
use noesis_pipeline::{ReasoningPipeline, StepContext, StepHandler};
use test_fixtures::{knowledge_with_uncertainties, CannedGenerator, EchoGenerator, FailingGenerator};

fn default_pipeline(generator: impl noesis_core::traits::IGenerator + 'static) -> ReasoningPipeline {
    ReasoningPipeline::new(Arc::new(generator), PipelineConfig::default())
}

#[tokio::test]
async fn default_plan_produces_three_steps_with_expected_uncertainties() {
    let pipeline = default_pipeline(CannedGenerator::new("the answer"));
    let trace = pipeline
        .run("why did it fail", &ConstructedKnowledge::default())
        .await
        .unwrap();

    let kinds: Vec<StepKind> = trace.steps.iter().map(|s| s.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::InterpretQuery,
            StepKind::AnalyzeKnowledge,
            StepKind::SynthesizeAnswer,
        ]
    );
    assert_eq!(trace.steps[0].uncertainty.value(), 0.1);
    // No facts present → 0.5.
    assert_eq!(trace.steps[1].uncertainty.value(), 0.5);
    assert_eq!(trace.steps[2].uncertainty.value(), 0.2);
}

#[tokio::test]
async fn overall_uncertainty_is_noisy_or_of_steps() {
    let pipeline = default_pipeline(CannedGenerator::new("the answer"));
    let trace = pipeline
        .run("q", &ConstructedKnowledge::default())
        .await
        .unwrap();

    // 1 - (0.9 * 0.5 * 0.8) = 0.64
    assert!((trace.overall_uncertainty.value() - 0.64).abs() < 1e-9);
}

#[tokio::test]
async fn reasoning_text_is_newline_joined_step_results() {
    let pipeline = default_pipeline(CannedGenerator::new("final synthesis"));
    let trace = pipeline
        .run("q", &ConstructedKnowledge::default())
        .await
        .unwrap();

    let lines: Vec<&str> = trace.reasoning.lines().collect();
    assert!(lines.len() >= 3);
    assert_eq!(*lines.last().unwrap(), "final synthesis");
}

#[tokio::test]
async fn analyze_step_uses_mean_fact_uncertainty() {
    let pipeline = default_pipeline(CannedGenerator::new("a"));
    let knowledge = knowledge_with_uncertainties(&[0.2, 0.4, 0.6]);
    let trace = pipeline.run("q", &knowledge).await.unwrap();

    let analyze = &trace.steps[1];
    assert!((analyze.uncertainty.value() - 0.4).abs() < 1e-12);
    assert!(analyze.result.contains("3 relevant facts"));
}

#[tokio::test]
async fn synthesize_prompt_includes_prior_step_results() {
    // EchoGenerator returns the prompt, so the synthesis result must
    // contain the interpret step's output.
    let pipeline = default_pipeline(EchoGenerator);
    let trace = pipeline
        .run("what broke", &ConstructedKnowledge::default())
        .await
        .unwrap();

    let synthesis = &trace.steps[2].result;
    assert!(synthesis.contains("Query: what broke"));
    assert!(synthesis.contains("Interpreted query: what broke"));
}

#[tokio::test]
async fn generation_failure_is_fatal() {
    let pipeline = default_pipeline(FailingGenerator);
    let err = pipeline
        .run("q", &ConstructedKnowledge::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        NoesisError::Pipeline(PipelineError::GenerationFailed { .. })
    ));
}

#[tokio::test]
async fn unregistered_kind_completes_at_maximum_uncertainty() {
    let config = PipelineConfig {
        plan: vec![
            StepKind::InterpretQuery,
            StepKind::Custom("consult_oracle".to_string()),
        ],
        ..PipelineConfig::default()
    };
    let pipeline = ReasoningPipeline::new(Arc::new(CannedGenerator::new("a")), config);
    let trace = pipeline
        .run("q", &ConstructedKnowledge::default())
        .await
        .unwrap();

    assert_eq!(trace.steps[1].uncertainty.value(), 1.0);
    // Any step at uncertainty 1.0 saturates the noisy-OR combination.
    assert_eq!(trace.overall_uncertainty.value(), 1.0);
}

struct ConstantHandler;

#[async_trait]
impl StepHandler for ConstantHandler {
    async fn execute(
        &self,
        step: &ReasoningStep,
        _ctx: &StepContext<'_>,
    ) -> NoesisResult<ExecutedStep> {
        Ok(ExecutedStep {
            kind: step.kind(),
            result: "verified".to_string(),
            uncertainty: Uncertainty::new(0.05),
        })
    }
}

#[tokio::test]
async fn registered_custom_handler_is_dispatched() {
    let kind = StepKind::Custom("verify_claims".to_string());
    let config = PipelineConfig {
        plan: vec![StepKind::InterpretQuery, kind.clone()],
        ..PipelineConfig::default()
    };
    let mut pipeline = ReasoningPipeline::new(Arc::new(CannedGenerator::new("a")), config);
    pipeline.register_handler(kind.clone(), Box::new(ConstantHandler));

    let trace = pipeline
        .run("q", &ConstructedKnowledge::default())
        .await
        .unwrap();

    assert_eq!(trace.steps[1].kind, kind);
    assert_eq!(trace.steps[1].result, "verified");
    assert_eq!(trace.steps[1].uncertainty.value(), 0.05);
}
