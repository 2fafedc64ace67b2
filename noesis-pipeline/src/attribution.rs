//! Post-hoc decomposition of combined uncertainty into per-step
//! contributions and remediation suggestions.

use std::collections::HashMap;

use noesis_core::models::{ExecutedStep, StepKind};

/// Attributes overall uncertainty to the step kinds that produced it.
pub struct UncertaintyAttributionAnalyzer {
    suggestions: HashMap<StepKind, String>,
}

impl UncertaintyAttributionAnalyzer {
    /// Analyzer seeded with remediation text for the built-in step kinds.
    pub fn new() -> Self {
        let mut suggestions = HashMap::new();
        suggestions.insert(
            StepKind::InterpretQuery,
            "Clarify the query to reduce ambiguity.".to_string(),
        );
        suggestions.insert(
            StepKind::AnalyzeKnowledge,
            "Gather more relevant information to improve the knowledge base.".to_string(),
        );
        suggestions.insert(
            StepKind::SynthesizeAnswer,
            "Refine the answer synthesis process for better accuracy.".to_string(),
        );
        Self { suggestions }
    }

    /// Extend the suggestion table with a remediation for another kind.
    pub fn add_suggestion(&mut self, kind: StepKind, suggestion: impl Into<String>) {
        self.suggestions.insert(kind, suggestion.into());
    }

    /// Per-kind share of the total uncertainty.
    ///
    /// Steps sharing a kind have their uncertainties attributed
    /// individually and collapsed by summation under one key. A zero
    /// total defines every contribution as 0 instead of dividing by zero.
    pub fn attribute(&self, steps: &[ExecutedStep]) -> HashMap<StepKind, f64> {
        let total: f64 = steps.iter().map(|s| s.uncertainty.value()).sum();

        let mut contributions: HashMap<StepKind, f64> = HashMap::new();
        for step in steps {
            let share = if total > 0.0 {
                step.uncertainty.value() / total
            } else {
                0.0
            };
            *contributions.entry(step.kind.clone()).or_default() += share;
        }
        contributions
    }

    /// Remediation suggestions ordered by contribution descending
    /// (kind name breaks ties). Kinds without a table entry are skipped.
    pub fn suggest(&self, contributions: &HashMap<StepKind, f64>) -> Vec<String> {
        let mut ranked: Vec<(&StepKind, f64)> =
            contributions.iter().map(|(k, &v)| (k, v)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
        });

        ranked
            .into_iter()
            .filter_map(|(kind, _)| self.suggestions.get(kind).cloned())
            .collect()
    }
}

impl Default for UncertaintyAttributionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
