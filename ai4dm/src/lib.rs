//! Command-line front end for AI4DM data quality assessment.
//!
//! Reads CSV files from disk, scores them with [`ai4dm_core`] and renders
//! the results as a text, Markdown or JSON report.
//!
//! # Exit Status
//! - `0`: every file was analyzed
//! - `1`: at least one file could not be read or was empty
//! - `2`: `--fail-on-violation` was given and a score missed its threshold

pub mod cli;
pub mod input;
pub mod output;
pub mod report;

use ai4dm_core::QualityAnalyzer;
use anyhow::Context;
use std::process::ExitCode;
use tracing::{error, info, warn};

use crate::cli::{AnalyzeArgs, Cli, Command};
use crate::input::read_inputs;
use crate::output::write_report;
use crate::report::{AssessmentReport, render_dimensions};

/// Exit status when a file failed
pub const EXIT_FILE_FAILURE: u8 = 1;

/// Exit status when a threshold was violated under `--fail-on-violation`
pub const EXIT_THRESHOLD_VIOLATION: u8 = 2;

/// Runs the parsed command.
///
/// # Errors
/// Returns an error for invalid configuration or when the report cannot be
/// rendered or written. Per-file failures are reported, not returned.
pub async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Analyze(args) => run_analyze(args).await,
        Command::Dimensions => {
            write_report(&render_dimensions(), None).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<ExitCode> {
    let report = analyze_files(args).await?;

    let rendered = report
        .render(args.format)
        .context("Failed to render report")?;
    write_report(&rendered, args.output.as_deref()).await?;

    let violations = report.violation_count();
    if report.has_failures() {
        error!("{} file(s) could not be analyzed", report.failures.len());
        return Ok(ExitCode::from(EXIT_FILE_FAILURE));
    }
    if args.fail_on_violation && violations > 0 {
        error!("{} quality threshold violation(s)", violations);
        return Ok(ExitCode::from(EXIT_THRESHOLD_VIOLATION));
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads and analyzes every file named in `args`.
///
/// A file that cannot be read or holds no data is logged and recorded as
/// a failure; the remaining files are still analyzed.
///
/// # Errors
/// Returns an error if the flags describe an invalid configuration.
pub async fn analyze_files(args: &AnalyzeArgs) -> anyhow::Result<AssessmentReport> {
    let config = args.quality_config();
    config
        .validate()
        .context("Invalid quality configuration")?;
    let analyzer = QualityAnalyzer::new(config);

    info!("Analyzing {} file(s)...", args.files.len());
    let inputs = read_inputs(&args.files).await;

    let mut report = AssessmentReport::new();
    for input in inputs {
        let name = input.display_name();
        let outcome = input
            .content
            .and_then(|content| analyzer.analyze(&content, &name));

        match outcome {
            Ok(result) => {
                let violations = analyzer.threshold_violations(&result);
                for violation in &violations {
                    warn!(
                        "Quality violation in '{}': {} = {} (threshold: {})",
                        name, violation.metric, violation.actual, violation.threshold
                    );
                }
                info!(
                    "✓ {}: overall {} ({}), {} records",
                    name,
                    result.overall_score,
                    result.status(),
                    result.total_records
                );
                report.add_result(result, violations);
            }
            Err(e) => {
                error!("Failed to analyze {}: {}", input.path.display(), e);
                report.add_failure(input.path.display().to_string(), &e);
            }
        }
    }

    if report.violation_count() > 0 {
        info!(
            "✓ Quality analysis completed with {} violations",
            report.violation_count()
        );
    } else {
        info!("✓ Quality analysis completed - all thresholds met");
    }

    Ok(report)
}
