/// Noesis system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// EMA learning rate for causal strength updates (fixed).
pub const CAUSAL_LEARNING_RATE: f64 = 0.1;

/// Fixed uncertainty assigned to query interpretation steps.
pub const INTERPRET_QUERY_UNCERTAINTY: f64 = 0.1;

/// Fixed uncertainty assigned to answer synthesis steps.
pub const SYNTHESIZE_ANSWER_UNCERTAINTY: f64 = 0.2;

/// Uncertainty assumed for knowledge analysis when no facts are present.
pub const MISSING_FACTS_UNCERTAINTY: f64 = 0.5;

/// Conservative uncertainty for step kinds the pipeline has no handler for.
pub const UNHANDLED_STEP_UNCERTAINTY: f64 = 1.0;
