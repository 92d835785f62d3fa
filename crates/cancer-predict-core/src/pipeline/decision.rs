//! Threshold decision stage.

use crate::domain::{ClassificationResult, ConfidenceScore, Verdict};

/// Scores strictly above this percentage are classified as cancer.
pub const CANCER_THRESHOLD: f32 = 50.0;

/// Maps a confidence score to its classification.
///
/// The comparison is strict: a score of exactly 50 is `Non-cancer`.
#[must_use]
pub fn determine_result(score: ConfidenceScore) -> ClassificationResult {
    let verdict = if score.value() > CANCER_THRESHOLD {
        Verdict::Cancer
    } else {
        Verdict::NonCancer
    };
    ClassificationResult::from_verdict(verdict)
}
