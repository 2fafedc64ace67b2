//! # noesis-pipeline
//!
//! Sequential multi-step reasoning with quantified uncertainty:
//! plan → execute each step → combine uncertainties (noisy-OR) → trace.
//! Post-hoc attribution decomposes the combined uncertainty into per-step
//! contributions and remediation suggestions.

pub mod attribution;
pub mod engine;
pub mod handler;
pub mod plan;
pub mod pipeline;
pub mod registry;

pub use attribution::UncertaintyAttributionAnalyzer;
pub use engine::ReasoningEngine;
pub use handler::{StepContext, StepHandler};
pub use pipeline::ReasoningPipeline;
pub use registry::HandlerRegistry;
