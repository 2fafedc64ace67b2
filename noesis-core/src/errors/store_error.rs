/// Graph store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying graph database cannot be reached. Surfaced to the
    /// caller, which may retry with backoff; never swallowed here.
    #[error("graph store unavailable: {reason}")]
    Unavailable { reason: String },

    /// A store call exceeded its per-call timeout. Hard failure for that
    /// invocation.
    #[error("graph store call timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },
}
