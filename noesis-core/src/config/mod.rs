pub mod defaults;
pub mod pipeline_config;
pub mod search_config;

pub use pipeline_config::PipelineConfig;
pub use search_config::SearchConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the reasoning system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoesisConfig {
    pub search: SearchConfig,
    pub pipeline: PipelineConfig,
}
