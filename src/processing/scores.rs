//! Conversion of raw analysis signals into 0-100 integer scores

use crate::processing::signals::{Score, SimilaritySignals, SpamSignal, AI_SCORE_NOT_EVALUATED};

/// Combine the present similarity fractions into a single match score.
///
/// Mean of the present fractions, scaled to 100 and rounded. Fractions are
/// trusted to be in [0, 1]; anything else flows through unclamped.
pub fn normalize_match_score(similarities: &SimilaritySignals) -> Score {
    mean_percentage(&similarities.present())
}

/// Mean of `fractions` as a rounded percentage, 0 for an empty slice.
pub fn mean_percentage(fractions: &[f64]) -> Score {
    if fractions.is_empty() {
        return 0;
    }

    let mean = fractions.iter().sum::<f64>() / fractions.len() as f64;
    to_score(mean * 100.0)
}

/// Map the provider's AI-generation score onto 0-100.
///
/// The provider is inconsistent about units: -1 means "not evaluated",
/// values strictly between 0 and 1 are treated as noise, and everything
/// else is read as a percentage.
pub fn adjust_ai_generated_score(raw: f64) -> Score {
    // TODO: scale (0, 1) by 100 instead of zeroing once the provider confirms
    // these are fractions and not noise.
    let score = if raw == AI_SCORE_NOT_EVALUATED || (raw > 0.0 && raw < 1.0) {
        0
    } else {
        to_score(raw)
    };

    score.clamp(0, 100)
}

/// Spam probability as a rounded percentage.
///
/// A missing probability scores 0 but is reported as `SpamSignal::Absent`.
pub fn derive_spam_score(spam_probability: Option<f64>) -> (Score, SpamSignal) {
    match spam_probability {
        Some(probability) => (to_score(probability * 100.0), SpamSignal::Observed),
        None => (0, SpamSignal::Absent),
    }
}

/// Round half away from zero and narrow; NaN becomes 0 and infinities saturate.
fn to_score(value: f64) -> Score {
    value.round() as Score
}
