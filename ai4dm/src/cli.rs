//! Command-line definitions for the `ai4dm` binary.
//!
//! Flags map onto [`QualityConfig`] through [`AnalyzeArgs::quality_config`];
//! every analysis option also reads an `AI4DM_*` environment variable.

use ai4dm_core::numeric::to_score;
use ai4dm_core::quality::{
    AnomalySensitivity, DimensionThresholds, IdentifierMatching, OutlierConfig, QualityConfig,
};
use ai4dm_core::DimensionKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

/// Command-line interface for the data quality analyzer
#[derive(Debug, Parser)]
#[command(name = "ai4dm")]
#[command(about = "Offline data quality assessment for CSV files")]
#[command(version)]
#[command(long_about = "
AI4DM - Data quality assessment for comma-separated files

Scores each file across five dimensions:
- Completeness: share of cells holding a value
- Consistency: one value type and one casing per column
- Validity: email, date, phone and numeric formats keyed by header names
- Accuracy: business rules and statistical outliers
- Uniqueness: duplicate rows and duplicate identifiers

Files are read locally and never leave the machine.

EXAMPLES:
  ai4dm analyze customers.csv
  ai4dm analyze --format json --output report.json orders.csv returns.csv
  ai4dm analyze --quality-threshold overall:75,uniqueness:90 --fail-on-violation data.csv
")]
pub struct Cli {
    /// Flags shared by every command
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one or more CSV files
    Analyze(AnalyzeArgs),
    /// List the quality dimensions and the header keywords they react to
    Dimensions,
}

/// Verbosity flags
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `analyze` command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// CSV files to analyze
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "AI4DM_FORMAT")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, env = "AI4DM_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Minimum scores (overall:75,completeness:90,...)
    #[arg(long, value_delimiter = ',', env = "AI4DM_QUALITY_THRESHOLD")]
    pub quality_threshold: Vec<String>,

    /// Z-score sensitivity for outlier detection
    #[arg(long, value_enum, default_value_t = Sensitivity::Medium, env = "AI4DM_SENSITIVITY")]
    pub sensitivity: Sensitivity,

    /// Width of the IQR outlier fences
    #[arg(long, default_value_t = 1.5, env = "AI4DM_IQR_MULTIPLIER")]
    pub iqr_multiplier: f64,

    /// Disable statistical outlier detection in the accuracy dimension
    #[arg(long)]
    pub disable_outliers: bool,

    /// How identifier columns are recognized from their header
    #[arg(
        long,
        value_enum,
        default_value_t = Matching::Substring,
        env = "AI4DM_IDENTIFIER_MATCHING"
    )]
    pub identifier_matching: Matching,

    /// Exit with a non-zero status when any score is below its threshold
    #[arg(long)]
    pub fail_on_violation: bool,
}

/// Report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain terminal text
    Text,
    /// Markdown document
    Markdown,
    /// Structured JSON
    Json,
}

/// Outlier sensitivity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sensitivity {
    /// 3.5 standard deviations
    Low,
    /// 3.0 standard deviations
    Medium,
    /// 2.5 standard deviations
    High,
}

impl From<Sensitivity> for AnomalySensitivity {
    fn from(value: Sensitivity) -> Self {
        match value {
            Sensitivity::Low => Self::Low,
            Sensitivity::Medium => Self::Medium,
            Sensitivity::High => Self::High,
        }
    }
}

/// Identifier matching strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Matching {
    /// `id`, `key` or `email` anywhere in the header
    Substring,
    /// `id`, `key` or `email` as a whole word of the header
    Token,
}

impl From<Matching> for IdentifierMatching {
    fn from(value: Matching) -> Self {
        match value {
            Matching::Substring => Self::Substring,
            Matching::Token => Self::Token,
        }
    }
}

impl AnalyzeArgs {
    /// Builds the analyzer configuration from the parsed flags.
    pub fn quality_config(&self) -> QualityConfig {
        let outliers = OutlierConfig::new()
            .with_enabled(!self.disable_outliers)
            .with_sensitivity(self.sensitivity.into())
            .with_iqr_multiplier(self.iqr_multiplier);

        QualityConfig::new()
            .with_outliers(outliers)
            .with_identifier_matching(self.identifier_matching.into())
            .with_thresholds(parse_quality_thresholds(&self.quality_threshold))
    }
}

/// Parses `metric:value` threshold overrides on top of the defaults.
///
/// Metrics are `overall` or a dimension key. Values are scores between 0
/// and 100; out-of-range values are clamped and unknown metrics or
/// unparseable values are skipped with a warning.
pub fn parse_quality_thresholds(thresholds: &[String]) -> DimensionThresholds {
    let mut result = DimensionThresholds::default();

    for threshold in thresholds {
        let Some((metric, value)) = threshold.split_once(':') else {
            warn!("Ignoring threshold without metric:value form: {}", threshold);
            continue;
        };
        let metric = metric.trim().to_lowercase();

        let Ok(v) = value.trim().parse::<f64>() else {
            warn!("Invalid threshold value for {}: {}", metric, value);
            continue;
        };
        if !(0.0..=100.0).contains(&v) {
            warn!(
                "Threshold value {} for {} is outside valid range [0, 100]",
                v, metric
            );
        }
        let score = to_score(v);

        if metric == "overall" {
            result = result.with_overall_min(score);
        } else if let Some(kind) = DimensionKind::from_key(&metric) {
            result = result.with_min(kind, score);
        } else {
            warn!("Unknown quality metric: {}", metric);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_quality_thresholds() {
        let thresholds =
            parse_quality_thresholds(&strings(&["overall:75", "Uniqueness:90", "accuracy:82.5"]));

        assert_eq!(thresholds.overall_min, 75);
        assert_eq!(thresholds.uniqueness_min, 90);
        assert_eq!(thresholds.accuracy_min, 83);
        assert_eq!(thresholds.completeness_min, 60);
    }

    #[test]
    fn test_parse_quality_thresholds_skips_bad_entries() {
        let thresholds = parse_quality_thresholds(&strings(&[
            "freshness:90",
            "validity:high",
            "consistency",
            "completeness:150",
        ]));

        assert_eq!(thresholds.validity_min, 60);
        assert_eq!(thresholds.consistency_min, 60);
        assert_eq!(thresholds.completeness_min, 100);
    }

    #[test]
    fn test_cli_defaults_match_core_defaults() {
        let cli = Cli::try_parse_from(["ai4dm", "analyze", "data.csv"]).unwrap();
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };

        assert_eq!(args.format, OutputFormat::Text);
        let config = args.quality_config();
        let defaults = QualityConfig::default();
        assert_eq!(config.outliers.enabled, defaults.outliers.enabled);
        assert_eq!(config.outliers.sensitivity, defaults.outliers.sensitivity);
        assert!((config.outliers.iqr_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.identifier_matching, defaults.identifier_matching);
        assert_eq!(config.thresholds, defaults.thresholds);
    }

    #[test]
    fn test_cli_flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "ai4dm",
            "-vv",
            "analyze",
            "--format",
            "json",
            "--sensitivity",
            "high",
            "--disable-outliers",
            "--identifier-matching",
            "token",
            "--quality-threshold",
            "overall:70,uniqueness:95",
            "a.csv",
            "b.csv",
        ])
        .unwrap();
        assert_eq!(cli.global.verbose, 2);

        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze command");
        };
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.format, OutputFormat::Json);

        let config = args.quality_config();
        assert!(!config.outliers.enabled);
        assert_eq!(config.outliers.sensitivity, AnomalySensitivity::High);
        assert_eq!(config.identifier_matching, IdentifierMatching::Token);
        assert_eq!(config.thresholds.overall_min, 70);
        assert_eq!(config.thresholds.uniqueness_min, 95);
    }

    #[test]
    fn test_cli_requires_files() {
        assert!(Cli::try_parse_from(["ai4dm", "analyze"]).is_err());
    }
}
