//! Per-application scoring and classification

pub mod signals;
pub mod experience;
pub mod scores;
pub mod classifier;
pub mod sanitizer;
pub mod evaluator;
