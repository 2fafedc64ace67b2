//! # noesis-store
//!
//! In-memory reference implementation of `IGraphStore`. The production
//! backend is an external graph database; this crate makes the temporal
//! query contract executable for tests and embedded use.

pub mod memory_store;

pub use memory_store::MemoryGraphStore;
