//! Per-application evaluation pipeline
//!
//! Runs the independent scoring stages over one `RawResumeSignals` record and
//! feeds their outputs to the status classifier.

use crate::processing::classifier::{Classification, ClassifierInput, StatusClassifier};
use crate::processing::experience::ExperienceEstimator;
use crate::processing::sanitizer::InputSanitizer;
use crate::processing::scores::{adjust_ai_generated_score, derive_spam_score, normalize_match_score};
use crate::processing::signals::{EvaluatedResume, RawResumeSignals};
use log::debug;

/// How many skills are surfaced as display keywords.
pub const MAX_KEYWORDS: usize = 5;

/// Stateless evaluator; one instance can be shared across threads.
pub struct ResumeEvaluator {
    experience: ExperienceEstimator,
    classifier: StatusClassifier,
    sanitizer: Option<InputSanitizer>,
}

impl Default for ResumeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeEvaluator {
    pub fn new() -> Self {
        Self {
            experience: ExperienceEstimator::new(),
            classifier: StatusClassifier::new(),
            sanitizer: None,
        }
    }

    /// Clamp incoming fractions before scoring
    pub fn with_sanitizer(mut self, enable: bool) -> Self {
        self.sanitizer = enable.then(InputSanitizer::new);
        self
    }

    pub fn evaluate(&self, signals: &RawResumeSignals) -> EvaluatedResume {
        self.evaluate_traced(signals).0
    }

    /// Evaluate and also report which classification rule fired.
    pub fn evaluate_traced(&self, signals: &RawResumeSignals) -> (EvaluatedResume, Classification) {
        let sanitized;
        let signals = match &self.sanitizer {
            Some(sanitizer) => {
                sanitized = sanitizer.sanitize(signals);
                &sanitized
            }
            None => signals,
        };

        let match_score = normalize_match_score(&signals.similarities());
        let ai_generated_score = adjust_ai_generated_score(signals.ai_generated_score_raw);
        let (spam_score, spam_signal) = derive_spam_score(signals.spam_probability);
        let experience_years = self.experience.estimate(&signals.experience_text);

        let classification = self.classifier.classify_traced(&ClassifierInput {
            match_score,
            ai_generated_score,
            spam_score,
            is_analyzed: signals.is_analyzed,
        });

        debug!(
            "Application {}: match={} ai={} spam={} -> {} ({})",
            signals.id, match_score, ai_generated_score, spam_score,
            classification.status, classification.rule
        );

        let evaluated = EvaluatedResume {
            identity: signals.identity(),
            match_score,
            ai_generated_score,
            spam_score,
            spam_signal,
            experience_years,
            status: classification.status,
            keywords: extract_keywords(&signals.skills),
        };

        (evaluated, classification)
    }

    /// Evaluate a batch, preserving input order.
    pub fn evaluate_batch(&self, batch: &[RawResumeSignals]) -> Vec<EvaluatedResume> {
        batch.iter().map(|signals| self.evaluate(signals)).collect()
    }
}

/// First few non-empty entries of a comma separated skills list.
pub fn extract_keywords(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
