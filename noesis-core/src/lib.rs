//! # noesis-core
//!
//! Foundation crate for the Noesis reasoning system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod knowledge;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NoesisConfig;
pub use errors::{NoesisError, NoesisResult};
pub use knowledge::{ConstructedKnowledge, Fact};
pub use models::{
    Beam, CausalEdge, Entity, ExecutedStep, NodeVersion, ReasoningOutcome, ReasoningStep,
    ReasoningTrace, ScoredNode, StepKind, Uncertainty,
};
