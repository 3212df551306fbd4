//! CLI interface for the resume ranker

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Snapshot file extensions the input manager understands.
pub const SNAPSHOT_EXTENSIONS: &[&str] = &["json", "toml"];

#[derive(Parser)]
#[command(name = "resume-ranker")]
#[command(about = "Candidate evaluation and ranking over analyzed resume snapshots")]
#[command(long_about = "Score, classify and rank job applicants from an analysis snapshot, and build the recruiter dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate applications and print the filtered, sorted list
    Evaluate {
        /// Path to the analysis snapshot (JSON, TOML)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Only applications for this job id
        #[arg(short, long)]
        job: Option<u64>,

        /// Status filter: all, recommended, maybe, not-recommended
        #[arg(long, default_value = "all")]
        status: String,

        /// Match score ordering: none, desc, asc
        #[arg(long, default_value = "none")]
        sort: String,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,

        /// Show the classification rule and application id per entry
        #[arg(short, long)]
        detailed: bool,

        /// Clamp out-of-range signals before scoring
        #[arg(long)]
        sanitize: bool,
    },

    /// Aggregate applications into the recruiter dashboard
    Dashboard {
        /// Path to the analysis snapshot (JSON, TOML)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Only applications for this job id
        #[arg(short, long)]
        job: Option<u64>,

        /// Number of top applicants to list
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Search the job catalog
    Jobs {
        /// Path to the analysis snapshot (JSON, TOML)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Case-insensitive text matched against title, location and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Currently selected job id
        #[arg(long)]
        selected: Option<u64>,
    },

    /// Recompute the dashboard on a fixed interval
    Watch {
        /// Path to the analysis snapshot (JSON, TOML)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Only applications for this job id
        #[arg(short, long)]
        job: Option<u64>,

        /// Seconds between refreshes
        #[arg(short, long, default_value_t = 30)]
        interval: u64,

        /// Stop after this many refreshes
        #[arg(short = 'n', long)]
        iterations: Option<u64>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "ranking.top_n")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
