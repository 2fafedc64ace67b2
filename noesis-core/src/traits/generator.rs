use async_trait::async_trait;

use crate::errors::NoesisResult;

/// Free-text generation used by pipeline steps that synthesize prose.
#[async_trait]
pub trait IGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> NoesisResult<String>;
}
