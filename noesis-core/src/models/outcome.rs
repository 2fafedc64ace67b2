use serde::{Deserialize, Serialize};

use super::Uncertainty;

/// Result object returned by `ReasoningEngine::reason`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningOutcome {
    pub query: String,
    pub conclusion: String,
    /// `1 - uncertainty`.
    pub confidence: f64,
    pub uncertainty: Uncertainty,
    /// Content of the top 3 retrieved items.
    pub supporting_evidence: Vec<String>,
    /// First 5 activated knowledge keys.
    pub activated_concepts: Vec<String>,
}
