//! Quality analyzer facade.
//!
//! This module provides the main `QualityAnalyzer` that parses the input,
//! runs the five dimension analyzers and aggregates their scores.

use crate::error::QualityError;
use crate::models::{DataQualityResult, Dimensions, Grid, QualityStatus};
use crate::numeric::to_score;
use crate::parser::parse_delimited;
use crate::Result;

use super::accuracy::analyze_accuracy;
use super::columns::HeaderMatcher;
use super::completeness::analyze_completeness;
use super::config::QualityConfig;
use super::consistency::analyze_consistency;
use super::models::ThresholdViolation;
use super::uniqueness::analyze_uniqueness;
use super::validity::analyze_validity;

/// Quality analyzer for delimited text.
///
/// Each call parses and scores its input from scratch; the analyzer holds
/// only its configuration and can be shared freely between threads.
///
/// # Example
///
/// ```rust
/// use ai4dm_core::{QualityAnalyzer, QualityConfig, QualityStatus};
///
/// let analyzer = QualityAnalyzer::new(QualityConfig::default());
/// let result = analyzer.analyze("id,email\n1,a@example.com\n2,b@example.com\n", "users.csv")?;
///
/// assert_eq!(result.total_records, 2);
/// assert_eq!(result.dimensions.completeness.status, QualityStatus::Excellent);
/// # Ok::<(), ai4dm_core::QualityError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QualityAnalyzer {
    config: QualityConfig,
}

impl QualityAnalyzer {
    /// Creates a new quality analyzer with the given configuration.
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Creates a new quality analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(QualityConfig::default())
    }

    /// Returns a reference to the analyzer configuration.
    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Parses `content` and scores it.
    ///
    /// # Errors
    /// - [`QualityError::Configuration`] if the configuration is invalid
    /// - [`QualityError::EmptyInput`] if `content` has no non-blank lines
    pub fn analyze(&self, content: &str, file_name: &str) -> Result<DataQualityResult> {
        self.config
            .validate()
            .map_err(|e| QualityError::configuration(e.to_string()))?;

        let grid = parse_delimited(content);
        if grid.is_empty() {
            return Err(QualityError::empty_input(file_name));
        }

        Ok(self.analyze_grid(&grid, file_name))
    }

    /// Scores an already parsed grid.
    ///
    /// An empty grid degrades every dimension to its "no data" result
    /// instead of failing.
    pub fn analyze_grid(&self, grid: &Grid, file_name: &str) -> DataQualityResult {
        let ragged = grid.ragged_row_count();
        if ragged > 0 {
            tracing::warn!(
                "{}: {} row(s) do not match the header width of {}",
                file_name,
                ragged,
                grid.column_count()
            );
        }

        let matcher = HeaderMatcher::new(self.config.identifier_matching);
        let dimensions = Dimensions {
            completeness: analyze_completeness(grid),
            consistency: analyze_consistency(grid),
            validity: analyze_validity(grid),
            accuracy: analyze_accuracy(grid, &self.config.outliers),
            uniqueness: analyze_uniqueness(grid, &matcher),
        };

        let overall_score = to_score(dimensions.mean_score());
        let status = QualityStatus::from_score(overall_score);

        tracing::debug!(
            "{}: overall {} ({}) over {} record(s)",
            file_name,
            overall_score,
            status,
            grid.row_count().saturating_sub(1)
        );

        DataQualityResult {
            overall_score,
            total_records: grid.row_count().saturating_sub(1),
            total_columns: grid.column_count(),
            file_name: file_name.to_string(),
            dimensions,
            summary: status.summary().to_string(),
        }
    }

    /// Lists every score below its configured minimum.
    ///
    /// The overall score comes first, then dimensions in reporting order.
    pub fn threshold_violations(&self, result: &DataQualityResult) -> Vec<ThresholdViolation> {
        let thresholds = &self.config.thresholds;
        let mut violations = Vec::new();

        if result.overall_score < thresholds.overall_min {
            violations.push(ThresholdViolation::new(
                "overall",
                thresholds.overall_min,
                result.overall_score,
            ));
        }

        for (kind, dimension) in result.dimensions.iter() {
            let minimum = thresholds.min_for(kind);
            if dimension.score < minimum {
                violations.push(ThresholdViolation::new(kind.key(), minimum, dimension.score));
            }
        }

        violations
    }
}

/// Analyzes `content` with the default configuration.
///
/// # Errors
/// Returns [`QualityError::EmptyInput`] if `content` has no non-blank lines.
pub fn analyze_data_quality(content: &str, file_name: &str) -> Result<DataQualityResult> {
    QualityAnalyzer::with_defaults().analyze(content, file_name)
}
