//! Free-text search over the job catalog

use crate::listing::filter_sort::FilterSort;
use serde::{Deserialize, Serialize};

/// A job posting as served by the job catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u64,

    #[serde(alias = "job_role")]
    pub title: String,

    #[serde(default)]
    pub location: String,

    #[serde(default, alias = "job_description")]
    pub description: String,
}

/// Case-insensitive substring query over title, location and description.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    needle: String,
}

impl JobQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty query matches every job.
    pub fn matches(&self, job: &JobPosting) -> bool {
        [&job.title, &job.location, &job.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Jobs matching `query`, in catalog order.
pub fn search_jobs(jobs: &[JobPosting], query: &str) -> Vec<JobPosting> {
    let query = JobQuery::new(query);
    FilterSort::new()
        .filter(move |job: &JobPosting| query.matches(job))
        .apply(jobs)
}

/// Keep the current selection if it survived filtering, else fall back to
/// the first visible job.
pub fn reselect(selected: Option<&JobPosting>, filtered: &[JobPosting]) -> Option<JobPosting> {
    selected
        .and_then(|job| filtered.iter().find(|candidate| candidate.id == job.id))
        .or_else(|| filtered.first())
        .cloned()
}
