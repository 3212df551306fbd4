//! Batch aggregation for the applicant dashboard

pub mod aggregator;
pub mod education;
pub mod timeline;
