//! Recommendation tier classification
//!
//! An ordered rule table: rules are tried top to bottom and the first one
//! whose predicate holds decides the tier. Reordering the table changes
//! outcomes at the threshold boundaries.

use crate::processing::signals::{ResumeStatus, Score};
use serde::Serialize;

/// Everything the classifier looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierInput {
    pub match_score: Score,
    pub ai_generated_score: Score,
    pub spam_score: Score,
    pub is_analyzed: bool,
}

/// One `(predicate, result)` row of the decision table.
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub applies: fn(&ClassifierInput) -> bool,
    pub status: ResumeStatus,
}

impl std::fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("name", &self.name)
            .field("status", &self.status)
            .finish()
    }
}

/// Name reported when no rule in the table matched.
pub const FALLBACK_RULE: &str = "fallback";

/// Tier assigned when no rule in the table matched.
pub const FALLBACK_STATUS: ResumeStatus = ResumeStatus::NotRecommended;

static RULES: [ClassificationRule; 8] = [
    ClassificationRule {
        name: "not-analyzed",
        applies: not_analyzed,
        status: ResumeStatus::Maybe,
    },
    // Strong rejection
    ClassificationRule {
        name: "high-spam",
        applies: high_spam,
        status: ResumeStatus::NotRecommended,
    },
    ClassificationRule {
        name: "low-match",
        applies: low_match,
        status: ResumeStatus::NotRecommended,
    },
    ClassificationRule {
        name: "ai-generated-weak-match",
        applies: ai_generated_weak_match,
        status: ResumeStatus::NotRecommended,
    },
    // Strong recommendation
    ClassificationRule {
        name: "strong-match-clean",
        applies: strong_match_clean,
        status: ResumeStatus::Recommended,
    },
    ClassificationRule {
        name: "excellent-match",
        applies: excellent_match,
        status: ResumeStatus::Recommended,
    },
    // Borderline
    ClassificationRule {
        name: "good-match",
        applies: good_match,
        status: ResumeStatus::Maybe,
    },
    ClassificationRule {
        name: "fair-match",
        applies: fair_match,
        status: ResumeStatus::Maybe,
    },
];

fn not_analyzed(input: &ClassifierInput) -> bool {
    !input.is_analyzed
}

fn high_spam(input: &ClassifierInput) -> bool {
    input.spam_score > 75
}

fn low_match(input: &ClassifierInput) -> bool {
    input.match_score < 30
}

fn ai_generated_weak_match(input: &ClassifierInput) -> bool {
    input.ai_generated_score > 80 && input.match_score < 60
}

fn strong_match_clean(input: &ClassifierInput) -> bool {
    input.match_score > 75 && input.spam_score < 30 && input.ai_generated_score < 50
}

fn excellent_match(input: &ClassifierInput) -> bool {
    input.match_score > 85 && input.spam_score < 40 && input.ai_generated_score < 70
}

fn good_match(input: &ClassifierInput) -> bool {
    input.match_score > 60 && input.spam_score < 50 && input.ai_generated_score < 75
}

fn fair_match(input: &ClassifierInput) -> bool {
    input.match_score > 50 && input.spam_score < 65 && input.ai_generated_score < 80
}

/// Tier together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub status: ResumeStatus,
    pub rule: &'static str,
}

/// Stateless classifier over the fixed rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier;

impl StatusClassifier {
    pub fn new() -> Self {
        Self
    }

    /// The decision table in evaluation order.
    pub fn rules(&self) -> &'static [ClassificationRule] {
        &RULES
    }

    pub fn classify(&self, input: &ClassifierInput) -> ResumeStatus {
        self.classify_traced(input).status
    }

    /// Like [`classify`](Self::classify), also naming the rule that fired.
    pub fn classify_traced(&self, input: &ClassifierInput) -> Classification {
        self.rules()
            .iter()
            .find(|rule| (rule.applies)(input))
            .map(|rule| Classification {
                status: rule.status,
                rule: rule.name,
            })
            .unwrap_or(Classification {
                status: FALLBACK_STATUS,
                rule: FALLBACK_RULE,
            })
    }
}
