pub mod beam;
pub mod causal_edge;
pub mod entity;
pub mod node_version;
pub mod outcome;
pub mod step;
pub mod trace;
pub mod uncertainty;

pub use beam::Beam;
pub use causal_edge::CausalEdge;
pub use entity::Entity;
pub use node_version::{NodeVersion, ScoredNode};
pub use outcome::ReasoningOutcome;
pub use step::{ReasoningStep, StepKind};
pub use trace::{ExecutedStep, ReasoningTrace};
pub use uncertainty::Uncertainty;
