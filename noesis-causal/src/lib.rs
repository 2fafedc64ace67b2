//! # noesis-causal
//!
//! Process-wide tracker for directed causal relationships. Strengths are
//! learned online with an exponential moving average and updated
//! concurrently from unrelated reasoning invocations.

pub mod tracker;

pub use tracker::CausalLinkTracker;
