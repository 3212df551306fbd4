//! Analysis snapshots and the collaborator interfaces they satisfy

use crate::error::Result;
use crate::listing::jobs::JobPosting;
use crate::processing::signals::RawResumeSignals;
use serde::{Deserialize, Serialize};

/// Source of raw per-application signals.
pub trait AnalysisProvider {
    /// All applications for a job role, in provider order
    fn applications(&self, job_role_id: Option<u64>) -> Result<Vec<RawResumeSignals>>;

    /// A single application by id
    fn application(&self, id: u64) -> Result<Option<RawResumeSignals>>;
}

/// Source of job postings.
pub trait JobCatalog {
    fn jobs(&self) -> Result<Vec<JobPosting>>;
}

/// Point-in-time export from the analysis provider and job catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub applications: Vec<RawResumeSignals>,
}

impl Snapshot {
    pub fn job(&self, id: u64) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }
}

impl AnalysisProvider for Snapshot {
    /// `None` returns every application in the snapshot.
    fn applications(&self, job_role_id: Option<u64>) -> Result<Vec<RawResumeSignals>> {
        Ok(self
            .applications
            .iter()
            .filter(|app| job_role_id.is_none() || app.job_role_id == job_role_id)
            .cloned()
            .collect())
    }

    fn application(&self, id: u64) -> Result<Option<RawResumeSignals>> {
        Ok(self.applications.iter().find(|app| app.id == id).cloned())
    }
}

impl JobCatalog for Snapshot {
    fn jobs(&self) -> Result<Vec<JobPosting>> {
        Ok(self.jobs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        let mut a = RawResumeSignals::new(1, "A");
        a.job_role_id = Some(10);
        let mut b = RawResumeSignals::new(2, "B");
        b.job_role_id = Some(20);
        let mut c = RawResumeSignals::new(3, "C");
        c.job_role_id = Some(10);

        Snapshot {
            jobs: vec![JobPosting {
                id: 10,
                title: "Engineer".to_string(),
                location: "Remote".to_string(),
                description: String::new(),
            }],
            applications: vec![a, b, c],
        }
    }

    #[test]
    fn test_applications_by_job() {
        let snapshot = snapshot();

        let ids: Vec<u64> = snapshot.applications(Some(10)).unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(snapshot.applications(None).unwrap().len(), 3);
        assert!(snapshot.applications(Some(99)).unwrap().is_empty());
    }

    #[test]
    fn test_application_by_id() {
        let snapshot = snapshot();

        assert_eq!(snapshot.application(2).unwrap().map(|a| a.name), Some("B".to_string()));
        assert!(snapshot.application(42).unwrap().is_none());
    }

    #[test]
    fn test_job_catalog() {
        let snapshot = snapshot();
        assert_eq!(snapshot.jobs().unwrap().len(), 1);
        assert_eq!(snapshot.job(10).map(|j| j.title.as_str()), Some("Engineer"));
    }
}
