//! Confidence score newtype.

use std::fmt;

/// Model-estimated likelihood of the positive class, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceScore(f32);

impl ConfidenceScore {
    /// Scales a `[0, 1]` probability to a `[0, 100]` score.
    #[must_use]
    pub fn from_probability(probability: f32) -> Self {
        Self(probability * 100.0)
    }

    /// Wraps an already scaled score.
    #[must_use]
    pub const fn new(score: f32) -> Self {
        Self(score)
    }

    /// Returns the score in percent.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
