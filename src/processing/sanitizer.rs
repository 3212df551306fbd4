//! Ingestion-boundary cleanup of raw signals
//!
//! The scoring functions trust their inputs. When the analysis provider is
//! known to emit out-of-range fractions, run records through here first.

use crate::processing::signals::RawResumeSignals;
use log::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct InputSanitizer;

impl InputSanitizer {
    pub fn new() -> Self {
        Self
    }

    /// Copy of `signals` with every fraction forced into [0, 1].
    ///
    /// Non-finite fractions are dropped (treated as absent). The AI score is
    /// left alone; its scale is ambiguous and the adjuster clamps it anyway.
    pub fn sanitize(&self, signals: &RawResumeSignals) -> RawResumeSignals {
        let mut cleaned = signals.clone();
        let id = signals.id;

        cleaned.education_similarity =
            Self::clamp_fraction(id, "education_similarity", signals.education_similarity);
        cleaned.experience_similarity =
            Self::clamp_fraction(id, "experience_similarity", signals.experience_similarity);
        cleaned.skill_similarity =
            Self::clamp_fraction(id, "skill_similarity", signals.skill_similarity);
        cleaned.level_similarity =
            Self::clamp_fraction(id, "level_similarity", signals.level_similarity);
        cleaned.spam_probability =
            Self::clamp_fraction(id, "spam_probability", signals.spam_probability);

        cleaned
    }

    fn clamp_fraction(id: u64, field: &str, value: Option<f64>) -> Option<f64> {
        let value = value?;

        if !value.is_finite() {
            warn!("Application {}: dropping non-finite {} ({})", id, field, value);
            return None;
        }

        let clamped = value.clamp(0.0, 1.0);
        if clamped != value {
            warn!("Application {}: {} {} clamped to {}", id, field, value, clamped);
        }
        Some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_untouched() {
        let mut signals = RawResumeSignals::new(1, "Ada");
        signals.education_similarity = Some(0.4);
        signals.skill_similarity = Some(1.0);
        signals.spam_probability = Some(0.0);

        assert_eq!(InputSanitizer::new().sanitize(&signals), signals);
    }

    #[test]
    fn test_out_of_range_clamped() {
        let mut signals = RawResumeSignals::new(2, "Bob");
        signals.education_similarity = Some(1.4);
        signals.level_similarity = Some(-0.2);
        signals.spam_probability = Some(3.0);
        signals.ai_generated_score_raw = 250.0;

        let cleaned = InputSanitizer::new().sanitize(&signals);

        assert_eq!(cleaned.education_similarity, Some(1.0));
        assert_eq!(cleaned.level_similarity, Some(0.0));
        assert_eq!(cleaned.spam_probability, Some(1.0));
        assert_eq!(cleaned.ai_generated_score_raw, 250.0);
        // Source record is never modified
        assert_eq!(signals.education_similarity, Some(1.4));
    }

    #[test]
    fn test_non_finite_dropped() {
        let mut signals = RawResumeSignals::new(3, "Cy");
        signals.skill_similarity = Some(f64::NAN);
        signals.experience_similarity = Some(f64::INFINITY);

        let cleaned = InputSanitizer::new().sanitize(&signals);

        assert_eq!(cleaned.skill_similarity, None);
        assert_eq!(cleaned.experience_similarity, None);
    }
}
