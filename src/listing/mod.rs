//! Filtered and sorted views over job and résumé lists

pub mod filter_sort;
pub mod jobs;
pub mod resumes;
