//! Resume ranker library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod listing;
pub mod output;
pub mod processing;
pub mod ranking;

pub use config::Config;
pub use error::{Result, ResumeRankerError};
pub use processing::evaluator::ResumeEvaluator;
pub use processing::signals::{EvaluatedResume, RawResumeSignals, ResumeStatus};
pub use ranking::aggregator::{DashboardSummary, RankingAggregator};
