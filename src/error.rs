//! Error handling for the resume ranker
//!
//! The scoring pipeline itself never fails; these errors come from the
//! collaborator layers around it (configuration, snapshot loading, output).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

/// Convert anyhow errors to our custom error type, keeping the context chain
impl From<anyhow::Error> for ResumeRankerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeRankerError::Processing(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_anyhow_context_is_kept() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"));
        let err: ResumeRankerError = io.context("Failed to write report.html").unwrap_err().into();

        let message = err.to_string();
        assert!(message.starts_with("Processing error: Failed to write report.html"));
        assert!(message.contains("no such directory"));
    }
}
