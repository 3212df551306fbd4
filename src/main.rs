//! Resume ranker: candidate evaluation and ranking over analyzed resume snapshots

use clap::Parser;
use log::{debug, error, info, warn};
use resume_ranker::cli::{self, Cli, Commands, ConfigAction};
use resume_ranker::config::{parse_output_format, Config, OutputFormat};
use resume_ranker::input::manager::InputManager;
use resume_ranker::input::snapshot::{AnalysisProvider, JobCatalog, Snapshot};
use resume_ranker::listing::jobs::{reselect, search_jobs, JobPosting};
use resume_ranker::listing::resumes::{ResumeListView, SortOrder, StatusFilter};
use resume_ranker::output::formatter::{save_report, ReportGenerator};
use resume_ranker::output::report::{DashboardSection, RankingReport, ReportMetadata, ResumeListSection};
use resume_ranker::{Result, ResumeEvaluator, ResumeRankerError};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: PathBuf) -> Result<()> {
    let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);

    match command {
        Commands::Evaluate {
            snapshot,
            job,
            status,
            sort,
            output,
            save,
            detailed,
            sanitize,
        } => {
            info!("Starting applicant evaluation");

            let filter: StatusFilter = status.parse()?;
            let sort: SortOrder = sort.parse()?;
            let output_format = resolve_output_format(output.as_deref(), &config)?;
            config.output.detailed |= detailed;

            let snapshot_data = load_snapshot(&mut input_manager, &snapshot).await?;
            let job_posting = resolve_job(&snapshot_data, job)?;
            let applications = snapshot_data.applications(job)?;

            println!("🚀 Evaluating {} applications", applications.len());
            if let Some(posting) = &job_posting {
                println!("💼 Job: {} ({})", posting.title, posting.location);
            }

            let evaluator = ResumeEvaluator::new().with_sanitizer(sanitize || config.input.sanitize_signals);
            let evaluations: Vec<_> = applications.iter().map(|app| evaluator.evaluate_traced(app)).collect();

            let report = RankingReport {
                metadata: ReportMetadata::new(snapshot.to_string_lossy(), job_posting),
                resumes: Some(ResumeListSection::build(&evaluations, ResumeListView::new(filter, sort))),
                dashboard: None,
            };

            emit_report(&report, &output_format, &config, save.as_deref()).await?;
        }

        Commands::Dashboard {
            snapshot,
            job,
            top,
            output,
            save,
        } => {
            info!("Building applicant dashboard");

            let output_format = resolve_output_format(output.as_deref(), &config)?;
            if let Some(top) = top {
                config.ranking.top_n = top;
            }

            let snapshot_data = load_snapshot(&mut input_manager, &snapshot).await?;
            let job_posting = resolve_job(&snapshot_data, job)?;
            let report = build_dashboard_report(&snapshot_data, &snapshot, job, job_posting, &config)?;

            emit_report(&report, &output_format, &config, save.as_deref()).await?;
        }

        Commands::Jobs {
            snapshot,
            query,
            selected,
        } => {
            let snapshot_data = load_snapshot(&mut input_manager, &snapshot).await?;
            let catalog = snapshot_data.jobs()?;
            let matches = search_jobs(&catalog, &query);
            let current = selected.and_then(|id| snapshot_data.job(id));
            let active = reselect(current, &matches);

            if query.is_empty() {
                println!("💼 {} jobs in catalog", catalog.len());
            } else {
                println!("🔍 {} of {} jobs match \"{}\"", matches.len(), catalog.len(), query);
            }

            for posting in &matches {
                let marker = match &active {
                    Some(active) if active.id == posting.id => "▶",
                    _ => " ",
                };
                println!("{} [{}] {} - {}", marker, posting.id, posting.title, posting.location);
            }

            if let (Some(id), Some(active)) = (selected, &active) {
                if id != active.id {
                    println!("\n⚠️  Job {} is not in the results; selected {} instead", id, active.id);
                }
            }
        }

        Commands::Watch {
            snapshot,
            job,
            interval,
            iterations,
        } => {
            println!("👀 Watching {} every {}s (Ctrl+C to stop)", snapshot.display(), interval);

            let generator = ReportGenerator::from_config(&config.output);
            let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
            let mut refreshes = 0u64;

            // Re-pull on every tick; a cached copy would never change
            let mut watch_manager = InputManager::new().with_cache(false);

            // Listen for Ctrl+C for the whole loop, including while a refresh renders
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = &mut ctrl_c => {
                        info!("Watch interrupted");
                        break;
                    }
                }

                match load_snapshot(&mut watch_manager, &snapshot).await.and_then(|snapshot_data| {
                    let job_posting = resolve_job(&snapshot_data, job)?;
                    build_dashboard_report(&snapshot_data, &snapshot, job, job_posting, &config)
                }) {
                    Ok(report) => {
                        let rendered = generator.generate_report(&report, &OutputFormat::Console)?;
                        println!("{}", rendered);
                    }
                    Err(e) => warn!("Refresh failed, keeping previous dashboard: {}", e),
                }

                refreshes += 1;
                if iterations.is_some_and(|limit| refreshes >= limit) {
                    break;
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", config.to_toml()?);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                println!("🔧 Setting {}: {}", key, value);
                config.set_value(&key, &value)?;
                config.save_to(&config_path)?;
                println!("✅ Configuration saved");
            }
        },
    }

    Ok(())
}

async fn load_snapshot(input_manager: &mut InputManager, path: &Path) -> Result<Snapshot> {
    cli::validate_file_extension(path, cli::SNAPSHOT_EXTENSIONS)
        .map_err(|e| ResumeRankerError::InvalidInput(format!("Snapshot file: {}", e)))?;

    input_manager.load_snapshot(path).await
}

/// Look up the job posting for `job`; an empty catalog means the snapshot
/// carries applications only.
fn resolve_job(snapshot: &Snapshot, job: Option<u64>) -> Result<Option<JobPosting>> {
    let Some(id) = job else {
        return Ok(None);
    };

    match snapshot.job(id) {
        Some(posting) => Ok(Some(posting.clone())),
        None if snapshot.jobs.is_empty() => {
            debug!("No job catalog in snapshot; filtering applications by job id {}", id);
            Ok(None)
        }
        None => Err(ResumeRankerError::NotFound(format!("Job {} is not in the catalog", id))),
    }
}

fn build_dashboard_report(
    snapshot: &Snapshot,
    snapshot_file: &Path,
    job: Option<u64>,
    job_posting: Option<JobPosting>,
    config: &Config,
) -> Result<RankingReport> {
    let applications = snapshot.applications(job)?;
    let evaluator = ResumeEvaluator::new().with_sanitizer(config.input.sanitize_signals);
    let resumes = evaluator.evaluate_batch(&applications);

    Ok(RankingReport {
        metadata: ReportMetadata::new(snapshot_file.to_string_lossy(), job_posting),
        resumes: None,
        dashboard: Some(DashboardSection::build(&resumes, &config.ranking)?),
    })
}

fn resolve_output_format(output: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match output {
        Some(format) => parse_output_format(format).map_err(ResumeRankerError::InvalidInput),
        None => Ok(config.output.format),
    }
}

async fn emit_report(
    report: &RankingReport,
    format: &OutputFormat,
    config: &Config,
    save: Option<&Path>,
) -> Result<()> {
    let generator = ReportGenerator::from_config(&config.output);
    let rendered = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            save_report(path, &rendered).await?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
