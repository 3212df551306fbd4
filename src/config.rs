//! Configuration management for the resume ranker

use crate::error::{Result, ResumeRankerError};
use crate::processing::signals::Score;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Size of the top applicants list
    pub top_n: usize,
    /// Spam score above which an application counts as potential spam
    pub potential_spam_threshold: Score,
    /// Keep zero-count bins in the match score distribution
    pub include_empty_bins: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Clamp similarity and spam fractions into [0, 1] before scoring
    pub sanitize_signals: bool,
    /// Serve repeat loads of the same path from memory. Only matters for an
    /// `InputManager` kept alive across loads; `watch` always re-reads.
    pub enable_caching: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            potential_spam_threshold: 70,
            include_empty_bins: true,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            sanitize_signals: false,
            enable_caching: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, writing defaults there if it does not exist yet
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeRankerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ResumeRankerError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ranker")
            .join("config.toml")
    }

    /// Set a single value by dotted key, e.g. `ranking.top_n`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "ranking.top_n" => self.ranking.top_n = parse_value(key, value)?,
            "ranking.potential_spam_threshold" => {
                self.ranking.potential_spam_threshold = parse_value(key, value)?
            }
            "ranking.include_empty_bins" => self.ranking.include_empty_bins = parse_value(key, value)?,
            "input.sanitize_signals" => self.input.sanitize_signals = parse_value(key, value)?,
            "input.enable_caching" => self.input.enable_caching = parse_value(key, value)?,
            "output.format" => {
                self.output.format = parse_output_format(value).map_err(ResumeRankerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(ResumeRankerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        ResumeRankerError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}
