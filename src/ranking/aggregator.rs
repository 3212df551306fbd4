//! Dashboard aggregates over a batch of evaluated résumés

use crate::config::RankingConfig;
use crate::processing::signals::{EvaluatedResume, ResumeStatus, Score};
use crate::ranking::education::{CategoryCount, EducationClassifier};
use crate::ranking::timeline::{applications_over_time, DailyCount};
use serde::{Deserialize, Serialize};

/// Match-score histogram bins: (label, lowest score, highest score), inclusive.
pub const MATCH_SCORE_BINS: [(&str, Score, Score); 5] = [
    ("0-20%", 0, 20),
    ("21-40%", 21, 40),
    ("41-60%", 41, 60),
    ("61-80%", 61, 80),
    ("81-100%", 81, 100),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub recommended: usize,
    pub maybe: usize,
    pub not_recommended: usize,
}

impl StatusCounts {
    pub fn get(&self, status: ResumeStatus) -> usize {
        match status {
            ResumeStatus::Recommended => self.recommended,
            ResumeStatus::Maybe => self.maybe,
            ResumeStatus::NotRecommended => self.not_recommended,
        }
    }
}

/// Headline numbers for one job's applicant pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_applicants: usize,
    /// Mean match score, rounded to two decimals
    pub average_match_score: f64,
    pub potential_spam_count: usize,
    pub status_counts: StatusCounts,
    pub match_score_distribution: Vec<DistributionBucket>,
    pub top_applicants: Vec<EvaluatedResume>,
}

/// Read-only view over a batch; every method recomputes from scratch.
pub struct RankingAggregator<'a> {
    resumes: &'a [EvaluatedResume],
    settings: RankingConfig,
}

impl<'a> RankingAggregator<'a> {
    pub fn new(resumes: &'a [EvaluatedResume]) -> Self {
        Self::with_config(resumes, &RankingConfig::default())
    }

    pub fn with_config(resumes: &'a [EvaluatedResume], settings: &RankingConfig) -> Self {
        Self {
            resumes,
            settings: settings.clone(),
        }
    }

    pub fn summarize(&self) -> DashboardSummary {
        DashboardSummary {
            total_applicants: self.resumes.len(),
            average_match_score: self.average_match_score(),
            potential_spam_count: self.potential_spam_count(),
            status_counts: self.status_counts(),
            match_score_distribution: self.match_score_distribution(),
            top_applicants: self.top_n(self.settings.top_n),
        }
    }

    /// The `n` best matches, highest first. Ties keep their input order.
    pub fn top_n(&self, n: usize) -> Vec<EvaluatedResume> {
        let mut ranked: Vec<&EvaluatedResume> = self.resumes.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        ranked.into_iter().take(n).cloned().collect()
    }

    pub fn average_match_score(&self) -> f64 {
        if self.resumes.is_empty() {
            return 0.0;
        }

        let total: i64 = self.resumes.iter().map(|r| i64::from(r.match_score)).sum();
        let mean = total as f64 / self.resumes.len() as f64;
        (mean * 100.0).round() / 100.0
    }

    pub fn potential_spam_count(&self) -> usize {
        self.resumes
            .iter()
            .filter(|r| r.spam_score > self.settings.potential_spam_threshold)
            .count()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.resumes
            .iter()
            .fold(StatusCounts::default(), |mut counts, resume| {
                match resume.status {
                    ResumeStatus::Recommended => counts.recommended += 1,
                    ResumeStatus::Maybe => counts.maybe += 1,
                    ResumeStatus::NotRecommended => counts.not_recommended += 1,
                }
                counts
            })
    }

    /// Histogram over [`MATCH_SCORE_BINS`].
    ///
    /// Scores outside 0-100 land in no bin. Empty bins are kept or dropped
    /// according to `include_empty_bins`.
    pub fn match_score_distribution(&self) -> Vec<DistributionBucket> {
        MATCH_SCORE_BINS
            .iter()
            .map(|(label, low, high)| DistributionBucket {
                range: label.to_string(),
                count: self
                    .resumes
                    .iter()
                    .filter(|r| (*low..=*high).contains(&r.match_score))
                    .count(),
            })
            .filter(|bucket| self.settings.include_empty_bins || bucket.count > 0)
            .collect()
    }

    pub fn education_breakdown(&self, classifier: &EducationClassifier) -> Vec<CategoryCount> {
        classifier.breakdown(self.resumes.iter().map(|r| r.identity.education.as_str()))
    }

    pub fn applications_over_time(&self) -> Vec<DailyCount> {
        applications_over_time(self.resumes)
    }
}
