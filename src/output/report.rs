//! Report structures handed to the formatters

use crate::config::RankingConfig;
use crate::error::Result;
use crate::listing::jobs::JobPosting;
use crate::listing::resumes::ResumeListView;
use crate::processing::classifier::Classification;
use crate::processing::signals::{EvaluatedResume, Score};
use crate::ranking::aggregator::{DashboardSummary, RankingAggregator};
use crate::ranking::education::{CategoryCount, EducationClassifier};
use crate::ranking::timeline::DailyCount;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Everything one CLI invocation renders.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,

    /// Filtered and sorted applicant list, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumes: Option<ResumeListSection>,

    /// Dashboard aggregates, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub snapshot_file: String,
    pub job: Option<JobPosting>,
    pub version: String,
}

impl ReportMetadata {
    pub fn new(snapshot_file: impl Into<String>, job: Option<JobPosting>) -> Self {
        Self {
            generated_at: Utc::now(),
            snapshot_file: snapshot_file.into(),
            job,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn job_title(&self) -> &str {
        self.job.as_ref().map(|j| j.title.as_str()).unwrap_or("All jobs")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeListSection {
    pub view: ResumeListView,
    /// Applications before filtering
    pub total_evaluated: usize,
    pub entries: Vec<ResumeEntry>,
}

/// One list row: the evaluation plus the classification rule that fired.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeEntry {
    #[serde(flatten)]
    pub resume: EvaluatedResume,
    pub rule: String,
}

impl ResumeListSection {
    /// Apply `view` to traced evaluations, keeping each entry's fired rule.
    pub fn build(evaluations: &[(EvaluatedResume, Classification)], view: ResumeListView) -> Self {
        let rules: HashMap<u64, &str> = evaluations
            .iter()
            .map(|(resume, classification)| (resume.id(), classification.rule))
            .collect();
        let resumes: Vec<EvaluatedResume> = evaluations.iter().map(|(resume, _)| resume.clone()).collect();

        let entries = view
            .apply(&resumes)
            .into_iter()
            .map(|resume| {
                let rule = rules.get(&resume.id()).copied().unwrap_or_default().to_string();
                ResumeEntry { resume, rule }
            })
            .collect();

        Self {
            view,
            total_evaluated: resumes.len(),
            entries,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSection {
    pub summary: DashboardSummary,
    pub education_breakdown: Vec<CategoryCount>,
    pub applications_over_time: Vec<DailyCount>,
}

impl DashboardSection {
    /// Aggregate a batch into every dashboard panel.
    pub fn build(resumes: &[EvaluatedResume], settings: &RankingConfig) -> Result<Self> {
        let aggregator = RankingAggregator::with_config(resumes, settings);
        let classifier = EducationClassifier::new()?;

        Ok(Self {
            summary: aggregator.summarize(),
            education_breakdown: aggregator.education_breakdown(&classifier),
            applications_over_time: aggregator.applications_over_time(),
        })
    }
}

/// Coarse display band for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: Score) -> Self {
        if score > 70 {
            ScoreBand::Strong
        } else if score > 40 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "score-strong",
            ScoreBand::Moderate => "score-moderate",
            ScoreBand::Weak => "score-weak",
        }
    }
}
