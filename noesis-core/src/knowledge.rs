//! Typed knowledge payload consumed by the reasoning pipeline.

use serde::{Deserialize, Serialize};

use crate::models::{ScoredNode, Uncertainty};

/// One fact assembled for the query, with the uncertainty it carried at
/// retrieval time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub content: String,
    pub uncertainty: Uncertainty,
}

impl From<&ScoredNode> for Fact {
    fn from(scored: &ScoredNode) -> Self {
        Self {
            content: scored.node.content.clone(),
            uncertainty: scored.node.uncertainty,
        }
    }
}

/// Knowledge constructed for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructedKnowledge {
    pub relevant_facts: Vec<Fact>,
}

impl ConstructedKnowledge {
    pub fn new(relevant_facts: Vec<Fact>) -> Self {
        Self { relevant_facts }
    }

    /// Build knowledge from retrieved nodes.
    pub fn from_retrieved(retrieved: &[ScoredNode]) -> Self {
        Self {
            relevant_facts: retrieved.iter().map(Fact::from).collect(),
        }
    }

    /// Mean uncertainty across facts, or `None` when no facts are present.
    pub fn mean_fact_uncertainty(&self) -> Option<Uncertainty> {
        if self.relevant_facts.is_empty() {
            return None;
        }
        let sum: f64 = self
            .relevant_facts
            .iter()
            .map(|f| f.uncertainty.value())
            .sum();
        Some(Uncertainty::new(sum / self.relevant_facts.len() as f64))
    }

    /// Append facts from another retrieval pass.
    pub fn extend_from_retrieved(&mut self, retrieved: &[ScoredNode]) {
        self.relevant_facts
            .extend(retrieved.iter().map(Fact::from));
    }
}
