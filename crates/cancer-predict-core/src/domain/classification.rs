//! Classification result types.

use serde::{Deserialize, Serialize};

/// Outcome of the threshold decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Confidence strictly above the threshold.
    #[serde(rename = "Cancer")]
    Cancer,
    /// Confidence at or below the threshold.
    #[serde(rename = "Non-cancer")]
    NonCancer,
}

impl Verdict {
    /// Returns the label sent to clients.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cancer => "Cancer",
            Self::NonCancer => "Non-cancer",
        }
    }

    /// Returns the localized advisory paired with this verdict.
    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::Cancer => "Segera periksa ke dokter!",
            Self::NonCancer => "Anda sehat!",
        }
    }
}

/// Result of classifying a single image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Classification label.
    pub result: Verdict,
    /// Localized advisory for the caller.
    pub suggestion: &'static str,
}

impl ClassificationResult {
    /// Builds the result for a verdict, pairing it with its suggestion.
    #[must_use]
    pub const fn from_verdict(verdict: Verdict) -> Self {
        Self {
            result: verdict,
            suggestion: verdict.suggestion(),
        }
    }
}
