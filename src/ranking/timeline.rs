//! Applications-per-day series

use crate::processing::signals::EvaluatedResume;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Count applications per UTC calendar day, oldest first.
///
/// Applications without a submission timestamp are left out. Days with no
/// applications are not filled in.
pub fn applications_over_time(resumes: &[EvaluatedResume]) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for submitted_at in resumes.iter().filter_map(|r| r.identity.submitted_at) {
        *per_day.entry(submitted_at.date_naive()).or_insert(0) += 1;
    }

    per_day
        .into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}
