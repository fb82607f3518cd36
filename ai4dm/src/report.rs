//! Assessment report envelope and renderers.
//!
//! The envelope adds the run metadata (tool version and timestamp) around
//! the analyzer results. The results themselves stay byte-for-byte what
//! the core produced, so two runs over the same files differ only in
//! `generated_at`.

use ai4dm_core::quality::{ColumnRole, ThresholdViolation, ViolationSeverity};
use ai4dm_core::{DataQualityResult, DimensionKind, QualityDimension, QualityError, QualityStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Report format version
pub const FORMAT_VERSION: &str = "1.0";

/// Results for every analyzed file plus the files that could not be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Report format version
    pub format_version: String,
    /// Version of the tool that produced the report
    pub tool_version: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// One entry per analyzed file, in command-line order
    pub files: Vec<FileAssessment>,
    /// Files that could not be read or analyzed
    pub failures: Vec<FileFailure>,
}

/// The quality result for one file and the thresholds it missed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAssessment {
    /// Analyzer output
    pub result: DataQualityResult,
    /// Scores below their configured minimum
    pub violations: Vec<ThresholdViolation>,
}

/// A file that produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFailure {
    /// Path as given on the command line
    pub path: String,
    /// Error message
    pub error: String,
}

impl Default for AssessmentReport {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentReport {
    /// Creates an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            files: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Adds a file result with its threshold violations.
    pub fn add_result(&mut self, result: DataQualityResult, violations: Vec<ThresholdViolation>) {
        self.files.push(FileAssessment { result, violations });
    }

    /// Records a file that could not be analyzed.
    pub fn add_failure(&mut self, path: impl Into<String>, error: &impl std::fmt::Display) {
        self.failures.push(FileFailure {
            path: path.into(),
            error: error.to_string(),
        });
    }

    /// Total threshold violations across all files.
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }

    /// Returns true if any file failed.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Renders the report in the requested format.
    ///
    /// # Errors
    /// Returns [`QualityError::Serialization`] if JSON encoding fails.
    pub fn render(&self, format: OutputFormat) -> ai4dm_core::Result<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Markdown => Ok(self.to_markdown()),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`QualityError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> ai4dm_core::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| QualityError::serialization("JSON report", e))
    }

    /// Markdown document with one section per file.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("# Data Quality Assessment\n\n");
        out.push_str(&format!(
            "Generated {} by ai4dm {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.tool_version
        ));

        for file in &self.files {
            let result = &file.result;
            out.push_str(&format!("## {}\n\n", result.file_name));
            out.push_str(&format!(
                "**Overall score:** {}/100 ({})  \n",
                result.overall_score,
                result.status()
            ));
            out.push_str(&format!(
                "**Records:** {} | **Columns:** {}\n\n",
                result.total_records, result.total_columns
            ));
            out.push_str(&format!("{}\n\n", result.summary));

            out.push_str("| Dimension | Score | Status |\n");
            out.push_str("|-----------|------:|--------|\n");
            for (_, dimension) in result.dimensions.iter() {
                out.push_str(&format!(
                    "| {} | {} | {} {} |\n",
                    dimension.name,
                    dimension.score,
                    status_badge(dimension.status),
                    dimension.status
                ));
            }
            out.push('\n');

            for (_, dimension) in result.dimensions.iter() {
                write_markdown_dimension(&mut out, dimension);
            }

            if !file.violations.is_empty() {
                out.push_str("### Threshold violations\n\n");
                for violation in &file.violations {
                    out.push_str(&format!("- {}\n", describe_violation(violation)));
                }
                out.push('\n');
            }
        }

        if self.has_failures() {
            out.push_str("## Failures\n\n");
            for failure in &self.failures {
                out.push_str(&format!("- `{}`: {}\n", failure.path, failure.error));
            }
            out.push('\n');
        }

        out
    }

    /// Plain text for terminals.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for file in &self.files {
            let result = &file.result;
            out.push_str(&format!("{}\n", result.file_name));
            out.push_str(&format!(
                "  Overall: {}/100 ({}), {} records, {} columns\n",
                result.overall_score,
                result.status(),
                result.total_records,
                result.total_columns
            ));
            out.push_str(&format!("  {}\n", result.summary));

            for (_, dimension) in result.dimensions.iter() {
                out.push_str(&format!(
                    "  {:<13} {:>3}  {} {}\n",
                    dimension.name,
                    dimension.score,
                    status_badge(dimension.status),
                    dimension.status
                ));
                for issue in &dimension.issues {
                    out.push_str(&format!("      ! {issue}\n"));
                }
                for recommendation in &dimension.recommendations {
                    out.push_str(&format!("      > {recommendation}\n"));
                }
            }

            for violation in &file.violations {
                out.push_str(&format!("  Threshold: {}\n", describe_violation(violation)));
            }
            out.push('\n');
        }

        for failure in &self.failures {
            out.push_str(&format!("Failed: {}: {}\n", failure.path, failure.error));
        }

        out
    }
}

fn write_markdown_dimension(out: &mut String, dimension: &QualityDimension) {
    out.push_str(&format!(
        "### {} {} ({}/100)\n\n",
        status_badge(dimension.status),
        dimension.name,
        dimension.score
    ));

    if !dimension.issues.is_empty() {
        out.push_str("**Issues**\n\n");
        for issue in &dimension.issues {
            out.push_str(&format!("- {issue}\n"));
        }
        out.push('\n');
    }

    out.push_str("**Recommendations**\n\n");
    for recommendation in &dimension.recommendations {
        out.push_str(&format!("- {recommendation}\n"));
    }
    out.push('\n');
}

/// Colored marker for a status tier.
fn status_badge(status: QualityStatus) -> &'static str {
    match status {
        QualityStatus::Excellent => "🟢",
        QualityStatus::Good => "🔵",
        QualityStatus::Fair => "🟡",
        QualityStatus::Poor => "🔴",
    }
}

fn describe_violation(violation: &ThresholdViolation) -> String {
    let severity = match violation.severity {
        ViolationSeverity::Warning => "warning",
        ViolationSeverity::Critical => "critical",
    };
    format!(
        "{} scored {} (minimum {}, {})",
        violation.metric, violation.actual, violation.threshold, severity
    )
}

/// Describes the dimensions, status tiers and header keywords.
pub fn render_dimensions() -> String {
    let mut out = String::new();

    out.push_str("Quality Dimensions:\n");
    for kind in DimensionKind::ALL {
        out.push_str(&format!("  {:<13} {}\n", kind.name(), dimension_description(kind)));
    }

    out.push('\n');
    out.push_str("Status Tiers:\n");
    for (status, range) in [
        (QualityStatus::Excellent, "90-100"),
        (QualityStatus::Good, "75-89"),
        (QualityStatus::Fair, "60-74"),
        (QualityStatus::Poor, "0-59"),
    ] {
        out.push_str(&format!("  {} {:<10} {}\n", status_badge(status), status.as_str(), range));
    }

    out.push('\n');
    out.push_str("Header Keywords (case-insensitive):\n");
    for role in ColumnRole::ALL {
        out.push_str(&format!(
            "  {:<38} {}\n",
            role.description(),
            role.keywords().join(", ")
        ));
    }

    out
}

fn dimension_description(kind: DimensionKind) -> &'static str {
    match kind {
        DimensionKind::Completeness => "Share of cells holding a value",
        DimensionKind::Consistency => "One value type and one casing per column",
        DimensionKind::Validity => "Email, date, phone and numeric formats",
        DimensionKind::Accuracy => "Business rules and statistical outliers",
        DimensionKind::Uniqueness => "Duplicate rows and duplicate identifiers",
    }
}
