pub mod pipeline_error;
pub mod store_error;

pub use pipeline_error::PipelineError;
pub use store_error::StoreError;

/// Umbrella error for the Noesis workspace.
#[derive(Debug, thiserror::Error)]
pub enum NoesisError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Result alias used across all Noesis crates.
pub type NoesisResult<T> = Result<T, NoesisError>;
