//! Default configuration values.

/// Default beam width for path search.
pub const DEFAULT_BEAM_WIDTH: usize = 5;

/// Default maximum search depth (expansion iterations).
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default bound on concurrent path-scoring calls at one depth.
pub const DEFAULT_SCORE_CONCURRENCY: usize = 8;

/// Default per-call timeout for scorer invocations (milliseconds).
pub const DEFAULT_SCORER_TIMEOUT_MS: u64 = 2_000;

/// Default per-call timeout for graph store invocations (milliseconds).
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5_000;

/// Default per-call timeout for generator invocations (milliseconds).
pub const DEFAULT_GENERATOR_TIMEOUT_MS: u64 = 10_000;

/// Default number of nodes fetched per point-in-time retrieval.
pub const DEFAULT_RETRIEVAL_K: usize = 10;
