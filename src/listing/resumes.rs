//! Status filtering and match-score ranking of evaluated résumé lists

use crate::error::{Result, ResumeRankerError};
use crate::listing::filter_sort::FilterSort;
use crate::processing::signals::{EvaluatedResume, ResumeStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tiers to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ResumeStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: ResumeStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ResumeRankerError;

    fn from_str(tag: &str) -> Result<Self> {
        let normalized = tag.trim().to_lowercase();
        if normalized == "all" {
            return Ok(StatusFilter::All);
        }

        ResumeStatus::ALL
            .iter()
            .find(|status| status.tag() == normalized)
            .map(|status| StatusFilter::Only(*status))
            .ok_or_else(|| {
                ResumeRankerError::InvalidInput(format!(
                    "Invalid status filter: {}. Supported: all, recommended, maybe, not-recommended",
                    tag
                ))
            })
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Only(status) => write!(f, "{}", status.tag()),
        }
    }
}

/// Match-score ordering of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Source order
    #[default]
    Unsorted,
    Descending,
    Ascending,
}

impl SortOrder {
    /// Next state of the "rank by match" toggle:
    /// unsorted -> descending -> ascending -> unsorted.
    pub fn next(self) -> Self {
        match self {
            SortOrder::Unsorted => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Unsorted,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ResumeRankerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "none" | "unsorted" | "default" => Ok(SortOrder::Unsorted),
            "desc" | "descending" => Ok(SortOrder::Descending),
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            _ => Err(ResumeRankerError::InvalidInput(format!(
                "Invalid sort order: {}. Supported: none, desc, asc",
                value
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Unsorted => write!(f, "none"),
            SortOrder::Descending => write!(f, "desc"),
            SortOrder::Ascending => write!(f, "asc"),
        }
    }
}

/// Reviewer-facing list state: a status filter plus the sort toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeListView {
    pub filter: StatusFilter,
    pub sort: SortOrder,
}

impl ResumeListView {
    pub fn new(filter: StatusFilter, sort: SortOrder) -> Self {
        Self { filter, sort }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Advance the sort toggle and return the new order
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort = self.sort.next();
        self.sort
    }

    /// Filtered and ordered copy of `resumes`; the source is never reordered.
    pub fn apply(&self, resumes: &[EvaluatedResume]) -> Vec<EvaluatedResume> {
        let filter = self.filter;
        let pipeline = FilterSort::new().filter(move |r: &EvaluatedResume| filter.accepts(r.status));

        let pipeline = match self.sort {
            SortOrder::Unsorted => pipeline,
            SortOrder::Descending => {
                pipeline.sort_by(|a: &EvaluatedResume, b: &EvaluatedResume| b.match_score.cmp(&a.match_score))
            }
            SortOrder::Ascending => {
                pipeline.sort_by(|a: &EvaluatedResume, b: &EvaluatedResume| a.match_score.cmp(&b.match_score))
            }
        };

        pipeline.apply(resumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::signals::{CandidateIdentity, Score, SpamSignal};

    fn resume(id: u64, match_score: Score, status: ResumeStatus) -> EvaluatedResume {
        EvaluatedResume {
            identity: CandidateIdentity {
                id,
                ..CandidateIdentity::default()
            },
            match_score,
            ai_generated_score: 0,
            spam_score: 0,
            spam_signal: SpamSignal::Absent,
            experience_years: 0,
            status,
            keywords: Vec::new(),
        }
    }

    fn sample() -> Vec<EvaluatedResume> {
        vec![
            resume(1, 55, ResumeStatus::Maybe),
            resume(2, 91, ResumeStatus::Recommended),
            resume(3, 12, ResumeStatus::NotRecommended),
            resume(4, 55, ResumeStatus::NotRecommended),
            resume(5, 78, ResumeStatus::Recommended),
        ]
    }

    fn ids(resumes: &[EvaluatedResume]) -> Vec<u64> {
        resumes.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "Not-Recommended".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ResumeStatus::NotRecommended)
        );
        assert_eq!(
            "maybe".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ResumeStatus::Maybe)
        );
        assert!("rejected".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_filter_by_status() {
        let resumes = sample();
        let view = ResumeListView::new(StatusFilter::Only(ResumeStatus::Recommended), SortOrder::Unsorted);

        assert_eq!(ids(&view.apply(&resumes)), vec![2, 5]);
    }

    #[test]
    fn test_sort_orders() {
        let resumes = sample();

        let desc = ResumeListView::new(StatusFilter::All, SortOrder::Descending).apply(&resumes);
        assert_eq!(ids(&desc), vec![2, 5, 1, 4, 3]);

        let asc = ResumeListView::new(StatusFilter::All, SortOrder::Ascending).apply(&resumes);
        assert_eq!(ids(&asc), vec![3, 1, 4, 5, 2]);
    }

    #[test]
    fn test_toggle_cycles_back_to_source_order() {
        let resumes = sample();
        let mut view = ResumeListView::default();

        assert_eq!(view.toggle_sort(), SortOrder::Descending);
        assert_eq!(ids(&view.apply(&resumes)), vec![2, 5, 1, 4, 3]);

        assert_eq!(view.toggle_sort(), SortOrder::Ascending);
        assert_eq!(ids(&view.apply(&resumes)), vec![3, 1, 4, 5, 2]);

        assert_eq!(view.toggle_sort(), SortOrder::Unsorted);
        assert_eq!(view.apply(&resumes), resumes);
    }

    #[test]
    fn test_filter_and_sort_combined() {
        let resumes = sample();
        let mut view = ResumeListView::new(StatusFilter::All, SortOrder::Ascending);
        view.set_filter(StatusFilter::Only(ResumeStatus::NotRecommended));

        assert_eq!(ids(&view.apply(&resumes)), vec![3, 4]);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("ASC".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("none".parse::<SortOrder>().unwrap(), SortOrder::Unsorted);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
