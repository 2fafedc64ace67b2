use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a knowledge-graph node.
///
/// Opaque to the reasoning core beyond identity and ordering; the ordering
/// is only used to keep neighbor expansion deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(String);

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Entity {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Entity {
    fn from(id: String) -> Self {
        Self(id)
    }
}
