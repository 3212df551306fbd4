//! Raw per-application signals and the evaluated records derived from them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Sentinel the analysis provider uses for "AI detection not run yet".
pub const AI_SCORE_NOT_EVALUATED: f64 = -1.0;

/// Integer score on the 0-100 scale.
///
/// Signed on purpose: malformed upstream fractions are allowed to push a
/// match or spam score out of range instead of being silently corrected.
pub type Score = i32;

/// Identity fields carried through evaluation untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateIdentity {
    pub id: u64,

    #[serde(default)]
    pub job_role_id: Option<u64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub education: String,

    /// Seniority level / last position as reported by the analysis provider
    #[serde(default)]
    pub level: String,

    /// Comma separated skills text
    #[serde(default)]
    pub skills: String,

    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

/// Per-field similarity fractions, each expected in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilaritySignals {
    pub education_similarity: Option<f64>,
    pub experience_similarity: Option<f64>,
    pub skill_similarity: Option<f64>,
    pub level_similarity: Option<f64>,
}

impl SimilaritySignals {
    /// The fractions that are actually present, in field order.
    pub fn present(&self) -> Vec<f64> {
        [
            self.education_similarity,
            self.experience_similarity,
            self.skill_similarity,
            self.level_similarity,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Snapshot of everything the analysis provider knows about one application.
///
/// Field names follow the provider's snake_case form; the provider's original
/// column names are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResumeSignals {
    pub id: u64,

    #[serde(default)]
    pub job_role_id: Option<u64>,

    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, alias = "Email")]
    pub email: Option<String>,

    #[serde(default, alias = "Education", deserialize_with = "null_as_default")]
    pub education: String,

    #[serde(default, alias = "Level", deserialize_with = "null_as_default")]
    pub level: String,

    #[serde(default, alias = "Skills", deserialize_with = "null_as_default")]
    pub skills: String,

    #[serde(default, alias = "created_at")]
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "Education_Similarity")]
    pub education_similarity: Option<f64>,

    #[serde(default, alias = "Experience_Similarity")]
    pub experience_similarity: Option<f64>,

    #[serde(default, alias = "Skill_Similarity")]
    pub skill_similarity: Option<f64>,

    #[serde(default, alias = "Level_Similarity")]
    pub level_similarity: Option<f64>,

    /// -1 sentinel, a (0, 1) fraction, or a 0-100 percentage
    #[serde(
        default = "default_ai_score",
        alias = "ai_generated_score",
        deserialize_with = "null_as_not_evaluated"
    )]
    pub ai_generated_score_raw: f64,

    #[serde(default)]
    pub spam_probability: Option<f64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_analyzed: bool,

    #[serde(default, alias = "Experience", deserialize_with = "null_as_default")]
    pub experience_text: String,
}

fn default_ai_score() -> f64 {
    AI_SCORE_NOT_EVALUATED
}

/// Pending applications carry explicit nulls until analysis fills them in.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_not_evaluated<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(AI_SCORE_NOT_EVALUATED))
}

impl RawResumeSignals {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            job_role_id: None,
            name: name.into(),
            email: None,
            education: String::new(),
            level: String::new(),
            skills: String::new(),
            submitted_at: None,
            education_similarity: None,
            experience_similarity: None,
            skill_similarity: None,
            level_similarity: None,
            ai_generated_score_raw: AI_SCORE_NOT_EVALUATED,
            spam_probability: None,
            is_analyzed: false,
            experience_text: String::new(),
        }
    }

    pub fn similarities(&self) -> SimilaritySignals {
        SimilaritySignals {
            education_similarity: self.education_similarity,
            experience_similarity: self.experience_similarity,
            skill_similarity: self.skill_similarity,
            level_similarity: self.level_similarity,
        }
    }

    /// Identity fields that pass through evaluation unchanged
    pub fn identity(&self) -> CandidateIdentity {
        CandidateIdentity {
            id: self.id,
            job_role_id: self.job_role_id,
            name: self.name.clone(),
            email: self.email.clone(),
            education: self.education.clone(),
            level: self.level.clone(),
            skills: self.skills.clone(),
            submitted_at: self.submitted_at,
        }
    }
}

/// Recommendation tier assigned by the status classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResumeStatus {
    Recommended,
    Maybe,
    #[serde(rename = "Not Recommended")]
    NotRecommended,
}

impl ResumeStatus {
    pub const ALL: [ResumeStatus; 3] = [
        ResumeStatus::Recommended,
        ResumeStatus::Maybe,
        ResumeStatus::NotRecommended,
    ];

    /// Short tag used by list filters and the CLI
    pub fn tag(&self) -> &'static str {
        match self {
            ResumeStatus::Recommended => "recommended",
            ResumeStatus::Maybe => "maybe",
            ResumeStatus::NotRecommended => "not-recommended",
        }
    }
}

impl fmt::Display for ResumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeStatus::Recommended => write!(f, "Recommended"),
            ResumeStatus::Maybe => write!(f, "Maybe"),
            ResumeStatus::NotRecommended => write!(f, "Not Recommended"),
        }
    }
}

/// Whether a spam score came from an actual spam probability.
///
/// Both variants can carry a score of 0: `Absent` means the provider had
/// nothing to say, not that the application is known to be clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpamSignal {
    Observed,
    Absent,
}

/// Result of running one application through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedResume {
    #[serde(flatten)]
    pub identity: CandidateIdentity,

    pub match_score: Score,
    pub ai_generated_score: Score,
    pub spam_score: Score,
    pub spam_signal: SpamSignal,
    pub experience_years: u32,
    pub status: ResumeStatus,

    /// First few entries of the skills text, for display
    pub keywords: Vec<String>,
}

impl EvaluatedResume {
    pub fn id(&self) -> u64 {
        self.identity.id
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_similarities_skip_missing() {
        let signals = SimilaritySignals {
            education_similarity: Some(0.5),
            experience_similarity: None,
            skill_similarity: Some(0.25),
            level_similarity: None,
        };

        assert_eq!(signals.present(), vec![0.5, 0.25]);
        assert!(SimilaritySignals::default().present().is_empty());
    }

    #[test]
    fn test_deserialize_provider_column_names() {
        let json = r#"{
            "id": 7,
            "Name": "Jane Roe",
            "Education": "BSc Computer Science",
            "Education_Similarity": 0.8,
            "Experience_Similarity": 0.6,
            "Skill_Similarity": 0.7,
            "Level_Similarity": 0.9,
            "ai_generated_score": 34.3409,
            "spam_probability": 0.12,
            "is_analyzed": true,
            "Experience": "5 years at Acme",
            "Skills": "Rust, Go"
        }"#;

        let signals: RawResumeSignals = serde_json::from_str(json).unwrap();

        assert_eq!(signals.id, 7);
        assert_eq!(signals.name, "Jane Roe");
        assert_eq!(signals.education, "BSc Computer Science");
        assert_eq!(signals.level_similarity, Some(0.9));
        assert_eq!(signals.ai_generated_score_raw, 34.3409);
        assert_eq!(signals.spam_probability, Some(0.12));
        assert!(signals.is_analyzed);
        assert_eq!(signals.experience_text, "5 years at Acme");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let signals: RawResumeSignals = serde_json::from_str(r#"{"id": 1}"#).unwrap();

        assert_eq!(signals.ai_generated_score_raw, AI_SCORE_NOT_EVALUATED);
        assert_eq!(signals.spam_probability, None);
        assert!(!signals.is_analyzed);
        assert!(signals.experience_text.is_empty());
        assert!(signals.similarities().present().is_empty());
    }

    #[test]
    fn test_pending_row_with_nulls() {
        let json = r#"{
            "id": 2,
            "Name": null,
            "Education": null,
            "Level": null,
            "Skills": null,
            "Experience": null,
            "Education_Similarity": null,
            "ai_generated_score": null,
            "spam_probability": null,
            "is_analyzed": null
        }"#;

        let signals: RawResumeSignals = serde_json::from_str(json).unwrap();

        assert!(signals.name.is_empty());
        assert!(signals.skills.is_empty());
        assert!(signals.experience_text.is_empty());
        assert_eq!(signals.education_similarity, None);
        assert_eq!(signals.ai_generated_score_raw, AI_SCORE_NOT_EVALUATED);
        assert_eq!(signals.spam_probability, None);
        assert!(!signals.is_analyzed);
    }

    #[test]
    fn test_status_display_and_serde() {
        assert_eq!(ResumeStatus::NotRecommended.to_string(), "Not Recommended");
        assert_eq!(
            serde_json::to_string(&ResumeStatus::NotRecommended).unwrap(),
            "\"Not Recommended\""
        );
        assert_eq!(ResumeStatus::Maybe.tag(), "maybe");
    }
}
