use std::fmt;

use serde::{Deserialize, Serialize};

/// Uncertainty value clamped to [0.0, 1.0].
/// Represents the probability that a reasoning step or fact is unreliable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uncertainty(f64);

impl Uncertainty {
    /// Maximum uncertainty — the step result carries no information.
    pub const MAX: Uncertainty = Uncertainty(1.0);

    /// Create a new Uncertainty, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The complementary confidence, `1 - u`.
    pub fn confidence(self) -> f64 {
        1.0 - self.0
    }

    /// Noisy-OR combination over independent per-step uncertainties:
    /// `1 - Π (1 - u_i)`.
    ///
    /// Monotone in every input, 0 only when every input is 0, 1 as soon as
    /// any input is 1, and order-independent.
    pub fn noisy_or(values: impl IntoIterator<Item = Uncertainty>) -> Uncertainty {
        let certain = values
            .into_iter()
            .fold(1.0, |acc, u| acc * (1.0 - u.value()));
        Self::new(1.0 - certain)
    }
}

impl Default for Uncertainty {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Uncertainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Uncertainty {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Uncertainty> for f64 {
    fn from(u: Uncertainty) -> Self {
        u.0
    }
}
