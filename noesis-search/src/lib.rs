//! # noesis-search
//!
//! Beam search over the knowledge graph: width-bounded, depth-limited
//! traversal where every candidate path is scored by an injected scorer.
//! Scoring within one depth runs concurrently behind a bounded,
//! order-preserving stream, so concurrency never changes the ranking.

pub mod engine;
pub mod expansion;

pub use engine::BeamPathSearch;
