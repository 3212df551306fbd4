//! Input processing module
//! Handles snapshot file detection, loading, and the provider interfaces

pub mod file_detector;
pub mod manager;
pub mod snapshot;
