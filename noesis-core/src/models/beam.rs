use serde::{Deserialize, Serialize};

use super::Entity;

/// A partial reasoning path retained during width-bounded search.
///
/// Beams are immutable once built: extending a beam derives a new one.
/// The path is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub path: Vec<Entity>,
    pub score: f64,
}

impl Beam {
    /// A singleton seed beam. Seeds are unscored until first expansion.
    pub fn seed(entity: Entity) -> Self {
        Self {
            path: vec![entity],
            score: 0.0,
        }
    }

    /// The frontier entity of this beam, `None` only for a manually
    /// constructed empty path.
    pub fn last(&self) -> Option<&Entity> {
        self.path.last()
    }

    /// Derive the unscored successor beam `path + [next]`. Candidates stay
    /// at score 0.0 until the scorer ranks them.
    pub fn extended(&self, next: Entity) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self { path, score: 0.0 }
    }

    /// Number of entities in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
