//! Output formatters - console, JSON, Markdown and HTML renderings of a report

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{Result, ResumeRankerError};
use crate::output::report::*;
use crate::processing::signals::{ResumeStatus, SpamSignal};
use anyhow::Context;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for downstream tooling
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing shortlists
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Applicant Ranking - {{ job_title }}</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; max-width: 960px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1 { color: #007acc; border-bottom: 3px solid #007acc; padding-bottom: 10px; }
        .stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; margin: 20px 0; }
        .stat { background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #007acc; }
        .stat .value { font-size: 1.8em; font-weight: bold; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e9ecef; }
        .status-recommended { color: #28a745; font-weight: bold; }
        .status-maybe { color: #b8860b; font-weight: bold; }
        .status-not-recommended { color: #dc3545; font-weight: bold; }
        .score-strong { color: #28a745; }
        .score-moderate { color: #b8860b; }
        .score-weak { color: #dc3545; }
        .metadata { margin-top: 30px; font-size: 0.85em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>Applicant Ranking - {{ job_title }}</h1>
        {% if has_dashboard %}
        <div class="stats">
            <div class="stat"><div>Total Applicants</div><div class="value">{{ total_applicants }}</div></div>
            <div class="stat"><div>Avg. Match Score</div><div class="value">{{ average_match_score }}%</div></div>
            <div class="stat"><div>Potential Spam</div><div class="value">{{ potential_spam_count }}</div></div>
        </div>
        <h2>Match Score Distribution</h2>
        <table>
            <tr><th>Range</th><th>Applicants</th></tr>
            {% for bucket in distribution %}
            <tr><td>{{ bucket.label }}</td><td>{{ bucket.count }}</td></tr>
            {% endfor %}
        </table>
        <h2>Top Applicants</h2>
        <table>
            <tr><th>#</th><th>Name</th><th>Match</th></tr>
            {% for row in top_applicants %}
            <tr><td>{{ row.rank }}</td><td>{{ row.name }}</td><td class="{{ row.score_class }}">{{ row.match_score }}%</td></tr>
            {% endfor %}
        </table>
        {% if has_education %}
        <h2>Education Breakdown</h2>
        <table>
            <tr><th>Field</th><th>Applicants</th></tr>
            {% for bucket in education %}
            <tr><td>{{ bucket.label }}</td><td>{{ bucket.count }}</td></tr>
            {% endfor %}
        </table>
        {% endif %}
        {% endif %}
        {% if has_resumes %}
        <h2>Analyzed Resumes ({{ resume_rows.len() }})</h2>
        <table>
            <tr><th>Name</th><th>Level</th><th>Experience</th><th>Match</th><th>AI Gen.</th><th>Spam</th><th>Status</th></tr>
            {% for row in resume_rows %}
            <tr>
                <td>{{ row.name }}</td>
                <td>{{ row.level }}</td>
                <td>{{ row.experience_years }} years</td>
                <td class="{{ row.score_class }}">{{ row.match_score }}%</td>
                <td>{{ row.ai_generated_score }}%</td>
                <td>{{ row.spam }}</td>
                <td class="{{ row.status_class }}">{{ row.status }}</td>
            </tr>
            {% endfor %}
        </table>
        {% endif %}
        <div class="metadata">
            <p>Generated {{ generated_at }} by resume-ranker v{{ version }} from {{ snapshot_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    job_title: String,
    generated_at: String,
    version: String,
    snapshot_file: String,
    has_dashboard: bool,
    total_applicants: usize,
    average_match_score: String,
    potential_spam_count: usize,
    distribution: Vec<HtmlCount>,
    top_applicants: Vec<HtmlTopApplicant>,
    has_education: bool,
    education: Vec<HtmlCount>,
    has_resumes: bool,
    resume_rows: Vec<HtmlResumeRow>,
}

struct HtmlCount {
    label: String,
    count: usize,
}

struct HtmlTopApplicant {
    rank: usize,
    name: String,
    match_score: i32,
    score_class: &'static str,
}

struct HtmlResumeRow {
    name: String,
    level: String,
    experience_years: u32,
    match_score: i32,
    score_class: &'static str,
    ai_generated_score: i32,
    spam: String,
    status: String,
    status_class: String,
}

fn spam_label(score: i32, signal: SpamSignal) -> String {
    match signal {
        SpamSignal::Observed => format!("{}%", score),
        SpamSignal::Absent => "n/a".to_string(),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_status_badge(&self, status: ResumeStatus) -> String {
        let color = match status {
            ResumeStatus::Recommended => Color::Green,
            ResumeStatus::Maybe => Color::Yellow,
            ResumeStatus::NotRecommended => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", status.to_string().color(color).bold())
        } else {
            format!("[{}]", status)
        }
    }

    fn format_score(&self, score: i32) -> String {
        let color = match ScoreBand::from_score(score) {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        };
        self.colorize(&format!("{}%", score), color)
    }

    fn format_rank(&self, index: usize) -> String {
        if self.use_colors {
            match index {
                0 => "🥇".to_string(),
                1 => "🥈".to_string(),
                2 => "🥉".to_string(),
                _ => format!("{:>2}.", index + 1),
            }
        } else {
            format!("{:>2}.", index + 1)
        }
    }

    fn format_bar(count: usize, max: usize) -> String {
        const WIDTH: usize = 30;
        if max == 0 {
            return String::new();
        }
        "■".repeat((count * WIDTH).div_ceil(max))
    }

    fn format_dashboard(&self, output: &mut String, dashboard: &DashboardSection) {
        let summary = &dashboard.summary;

        output.push_str(&self.format_header("Applicant Dashboard", 2));
        output.push_str(&format!("  • Total applicants:  {}\n", summary.total_applicants));
        output.push_str(&format!("  • Avg. match score:  {:.1}%\n", summary.average_match_score));
        output.push_str(&format!(
            "  • Potential spam:    {}\n",
            self.colorize(&summary.potential_spam_count.to_string(), Color::Red)
        ));
        output.push_str(&format!(
            "  • Recommended: {} | Maybe: {} | Not Recommended: {}\n",
            summary.status_counts.recommended,
            summary.status_counts.maybe,
            summary.status_counts.not_recommended
        ));

        output.push_str(&self.format_header("Match Score Distribution", 3));
        let max = summary
            .match_score_distribution
            .iter()
            .map(|b| b.count)
            .max()
            .unwrap_or(0);
        for bucket in &summary.match_score_distribution {
            output.push_str(&format!(
                "  {:>8} {:>4}  {}\n",
                bucket.range,
                bucket.count,
                self.colorize(&Self::format_bar(bucket.count, max), Color::Blue)
            ));
        }

        if !summary.top_applicants.is_empty() {
            output.push_str(&self.format_header(
                &format!("Top {} Applicants", summary.top_applicants.len()),
                3,
            ));
            for (index, resume) in summary.top_applicants.iter().enumerate() {
                output.push_str(&format!(
                    "  {} {} {}\n",
                    self.format_rank(index),
                    resume.name(),
                    self.format_score(resume.match_score)
                ));
            }
        }

        if !dashboard.education_breakdown.is_empty() {
            output.push_str(&self.format_header("Education Breakdown", 3));
            for category in &dashboard.education_breakdown {
                output.push_str(&format!("  • {}: {}\n", category.category, category.count));
            }
        }

        if self.detailed && !dashboard.applications_over_time.is_empty() {
            output.push_str(&self.format_header("Applications Over Time", 3));
            for day in &dashboard.applications_over_time {
                output.push_str(&format!("  {}  {}\n", day.date, day.count));
            }
        }
    }

    fn format_resume_list(&self, output: &mut String, section: &ResumeListSection) {
        output.push_str(&self.format_header(
            &format!(
                "Analyzed Resumes ({} of {}) - filter: {}, sort: {}",
                section.entries.len(),
                section.total_evaluated,
                section.view.filter,
                section.view.sort
            ),
            2,
        ));

        if section.entries.is_empty() {
            output.push_str("  No resumes match the current filter.\n");
            return;
        }

        for entry in &section.entries {
            let resume = &entry.resume;
            output.push_str(&format!(
                "\n  {} {}\n",
                self.colorize(resume.name(), Color::Cyan),
                self.format_status_badge(resume.status)
            ));
            output.push_str(&format!(
                "    {} • {} years\n",
                if resume.identity.level.is_empty() { "-" } else { resume.identity.level.as_str() },
                resume.experience_years
            ));
            output.push_str(&format!(
                "    Match: {}  AI Gen.: {}%  Spam: {}\n",
                self.format_score(resume.match_score),
                resume.ai_generated_score,
                spam_label(resume.spam_score, resume.spam_signal)
            ));
            if !resume.keywords.is_empty() {
                output.push_str(&format!("    Skills: {}\n", resume.keywords.join(", ")));
            }
            if self.detailed {
                output.push_str(&format!("    Rule: {} (id {})\n", entry.rule, resume.id()));
            }
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(
            &format!("APPLICANT RANKING - {}", report.metadata.job_title()),
            1,
        ));
        output.push_str(&format!(
            "Generated: {} | Snapshot: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.snapshot_file
        ));

        if let Some(dashboard) = &report.dashboard {
            self.format_dashboard(&mut output, dashboard);
        }

        if let Some(section) = &report.resumes {
            self.format_resume_list(&mut output, section);
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# Applicant Ranking: {}\n\n", report.metadata.job_title()));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Snapshot:** `{}`\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.snapshot_file
            ));
        }

        if let Some(dashboard) = &report.dashboard {
            let summary = &dashboard.summary;

            output.push_str("## Dashboard\n\n");
            output.push_str(&format!("- **Total applicants:** {}\n", summary.total_applicants));
            output.push_str(&format!("- **Average match score:** {:.1}%\n", summary.average_match_score));
            output.push_str(&format!("- **Potential spam:** {}\n", summary.potential_spam_count));
            output.push_str(&format!(
                "- **Recommended / Maybe / Not Recommended:** {} / {} / {}\n\n",
                summary.status_counts.recommended,
                summary.status_counts.maybe,
                summary.status_counts.not_recommended
            ));

            output.push_str("### Match Score Distribution\n\n| Range | Applicants |\n|---|---|\n");
            for bucket in &summary.match_score_distribution {
                output.push_str(&format!("| {} | {} |\n", bucket.range, bucket.count));
            }

            output.push_str("\n### Top Applicants\n\n| # | Name | Match |\n|---|---|---|\n");
            for (index, resume) in summary.top_applicants.iter().enumerate() {
                output.push_str(&format!("| {} | {} | {}% |\n", index + 1, resume.name(), resume.match_score));
            }

            if !dashboard.education_breakdown.is_empty() {
                output.push_str("\n### Education Breakdown\n\n| Field | Applicants |\n|---|---|\n");
                for category in &dashboard.education_breakdown {
                    output.push_str(&format!("| {} | {} |\n", category.category, category.count));
                }
            }
            output.push('\n');
        }

        if let Some(section) = &report.resumes {
            output.push_str(&format!(
                "## Analyzed Resumes ({} of {})\n\n",
                section.entries.len(),
                section.total_evaluated
            ));
            output.push_str("| Name | Level | Experience | Match | AI Gen. | Spam | Status |\n");
            output.push_str("|---|---|---|---|---|---|---|\n");
            for entry in &section.entries {
                let resume = &entry.resume;
                output.push_str(&format!(
                    "| {} | {} | {} years | {}% | {}% | {} | {} |\n",
                    resume.name(),
                    resume.identity.level,
                    resume.experience_years,
                    resume.match_score,
                    resume.ai_generated_score,
                    spam_label(resume.spam_score, resume.spam_signal),
                    resume.status
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &RankingReport) -> HtmlTemplate {
        let mut template = HtmlTemplate {
            include_styles: self.include_styles,
            job_title: report.metadata.job_title().to_string(),
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: report.metadata.version.clone(),
            snapshot_file: report.metadata.snapshot_file.clone(),
            has_dashboard: false,
            total_applicants: 0,
            average_match_score: String::new(),
            potential_spam_count: 0,
            distribution: Vec::new(),
            top_applicants: Vec::new(),
            has_education: false,
            education: Vec::new(),
            has_resumes: false,
            resume_rows: Vec::new(),
        };

        if let Some(dashboard) = &report.dashboard {
            let summary = &dashboard.summary;
            template.has_dashboard = true;
            template.total_applicants = summary.total_applicants;
            template.average_match_score = format!("{:.1}", summary.average_match_score);
            template.potential_spam_count = summary.potential_spam_count;
            template.distribution = summary
                .match_score_distribution
                .iter()
                .map(|b| HtmlCount {
                    label: b.range.clone(),
                    count: b.count,
                })
                .collect();
            template.top_applicants = summary
                .top_applicants
                .iter()
                .enumerate()
                .map(|(index, resume)| HtmlTopApplicant {
                    rank: index + 1,
                    name: resume.name().to_string(),
                    match_score: resume.match_score,
                    score_class: ScoreBand::from_score(resume.match_score).css_class(),
                })
                .collect();
            template.has_education = !dashboard.education_breakdown.is_empty();
            template.education = dashboard
                .education_breakdown
                .iter()
                .map(|c| HtmlCount {
                    label: c.category.clone(),
                    count: c.count,
                })
                .collect();
        }

        if let Some(section) = &report.resumes {
            template.has_resumes = true;
            template.resume_rows = section
                .entries
                .iter()
                .map(|entry| {
                    let resume = &entry.resume;
                    HtmlResumeRow {
                        name: resume.name().to_string(),
                        level: resume.identity.level.clone(),
                        experience_years: resume.experience_years,
                        match_score: resume.match_score,
                        score_class: ScoreBand::from_score(resume.match_score).css_class(),
                        ai_generated_score: resume.ai_generated_score,
                        spam: spam_label(resume.spam_score, resume.spam_signal),
                        status: resume.status.to_string(),
                        status_class: format!("status-{}", resume.status.tag()),
                    }
                })
                .collect();
        }

        template
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeRankerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(config.color_output, config.detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(config.detailed),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

/// Write a rendered report to `path`
pub async fn save_report(path: &Path, rendered: &str) -> Result<()> {
    tokio::fs::write(path, rendered)
        .await
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::resumes::ResumeListView;
    use crate::processing::signals::{CandidateIdentity, EvaluatedResume};
    use crate::ranking::aggregator::RankingAggregator;

    fn sample_report() -> RankingReport {
        let resumes = vec![
            EvaluatedResume {
                identity: CandidateIdentity {
                    id: 1,
                    name: "Ada <Lovelace>".to_string(),
                    level: "Senior".to_string(),
                    ..CandidateIdentity::default()
                },
                match_score: 88,
                ai_generated_score: 10,
                spam_score: 4,
                spam_signal: SpamSignal::Observed,
                experience_years: 9,
                status: ResumeStatus::Recommended,
                keywords: vec!["Rust".to_string()],
            },
            EvaluatedResume {
                identity: CandidateIdentity {
                    id: 2,
                    name: "Bob".to_string(),
                    ..CandidateIdentity::default()
                },
                match_score: 35,
                ai_generated_score: 0,
                spam_score: 0,
                spam_signal: SpamSignal::Absent,
                experience_years: 0,
                status: ResumeStatus::NotRecommended,
                keywords: Vec::new(),
            },
        ];

        let summary = RankingAggregator::new(&resumes).summarize();
        RankingReport {
            metadata: ReportMetadata::new("snapshot.json", None),
            resumes: Some(ResumeListSection {
                view: ResumeListView::default(),
                total_evaluated: resumes.len(),
                entries: resumes
                    .iter()
                    .map(|r| ResumeEntry {
                        resume: r.clone(),
                        rule: "test".to_string(),
                    })
                    .collect(),
            }),
            dashboard: Some(DashboardSection {
                summary,
                education_breakdown: Vec::new(),
                applications_over_time: Vec::new(),
            }),
        }
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();

        assert!(output.contains("APPLICANT RANKING - All jobs"));
        assert!(output.contains("Total applicants:  2"));
        assert!(output.contains("[Recommended]"));
        assert!(output.contains("[Not Recommended]"));
        assert!(output.contains("Spam: n/a"));
        assert!(output.contains("Rule: test"));
        assert!(output.contains(" 1. Ada <Lovelace> 88%"));
    }

    #[test]
    fn test_json_output_parses() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["dashboard"]["summary"]["total_applicants"], 2);
        assert_eq!(value["resumes"]["entries"][0]["match_score"], 88);
        assert_eq!(value["resumes"]["entries"][1]["status"], "Not Recommended");
    }

    #[test]
    fn test_markdown_tables() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# Applicant Ranking: All jobs"));
        assert!(output.contains("| 81-100% | 1 |"));
        assert!(output.contains("| Bob |  | 0 years | 35% | 0% | n/a | Not Recommended |"));
    }

    #[test]
    fn test_html_escapes_names() {
        let output = HtmlFormatter::new(false).format_report(&sample_report()).unwrap();

        assert!(output.contains("Ada &#60;Lovelace&#62;") || output.contains("Ada &lt;Lovelace&gt;"));
        assert!(output.contains("status-not-recommended"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new();
        let report = sample_report();

        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.contains("**Snapshot:** `snapshot.json`"));
    }
}
