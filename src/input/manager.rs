//! Input manager for loading analysis snapshots

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::snapshot::Snapshot;
use crate::processing::signals::RawResumeSignals;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, Snapshot>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn load_snapshot(&mut self, path: &Path) -> Result<Snapshot> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached snapshot for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let content = fs::read_to_string(path).await?;

        let snapshot = match file_type {
            FileType::Json => {
                info!("Reading JSON snapshot: {}", path.display());
                Self::parse_json(&content)?
            }
            FileType::Toml => {
                info!("Reading TOML snapshot: {}", path.display());
                toml::from_str(&content).map_err(|e| {
                    ResumeRankerError::InvalidInput(format!(
                        "Failed to parse snapshot '{}': {}",
                        path.display(),
                        e
                    ))
                })?
            }
            FileType::Unknown => {
                return Err(ResumeRankerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        debug!(
            "Snapshot {} holds {} jobs and {} applications",
            path.display(),
            snapshot.jobs.len(),
            snapshot.applications.len()
        );

        if self.enable_cache {
            self.cache.insert(path_str, snapshot.clone());
        }

        Ok(snapshot)
    }

    /// Parse a JSON snapshot: either a full `{jobs, applications}` object or a
    /// bare list of applications (the provider's per-job endpoint).
    pub fn parse_json(content: &str) -> Result<Snapshot> {
        if content.trim_start().starts_with('[') {
            let applications: Vec<RawResumeSignals> = serde_json::from_str(content)?;
            Ok(Snapshot {
                jobs: Vec::new(),
                applications,
            })
        } else {
            Ok(serde_json::from_str(content)?)
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeRankerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
