//! Consistency analysis for data quality assessment.
//!
//! This module checks that each column holds one kind of value and that
//! repeated values are written with the same casing.

use std::collections::HashSet;

use crate::models::{DimensionKind, Grid, QualityDimension};
use crate::numeric::parse_number;

use super::patterns::FormatPatterns;

/// Points deducted for a column holding more than one value type.
const MIXED_TYPE_PENALTY: u8 = 10;

/// Points deducted for a column with inconsistent casing.
const CASING_PENALTY: u8 = 5;

/// Distinct-value ratio (case-sensitive over case-folded) that signals
/// inconsistent casing.
const CASING_VARIATION_RATIO: f64 = 1.3;

/// Coarse value type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ValueType {
    Number,
    Date,
    Email,
    Text,
}

impl ValueType {
    /// Classifies a non-empty cell. Order matters: a value is the first
    /// type it satisfies.
    fn classify(value: &str, patterns: &FormatPatterns) -> Self {
        if parse_number(value).is_some() {
            ValueType::Number
        } else if patterns.is_iso_date(value) {
            ValueType::Date
        } else if patterns.is_email(value) {
            ValueType::Email
        } else {
            ValueType::Text
        }
    }
}

/// Analyzes consistency of the data rows.
///
/// Starts from 100 and deducts per offending column; empty cells are
/// ignored and all-empty columns are skipped.
pub fn analyze_consistency(grid: &Grid) -> QualityDimension {
    let Some(headers) = grid.headers().filter(|_| grid.has_data_rows()) else {
        return QualityDimension::unavailable(
            DimensionKind::Consistency,
            "Insufficient data for analysis",
            "Add more data rows",
        );
    };

    let patterns = FormatPatterns::instance();
    let mut score: u8 = 100;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    for (column, header) in headers.iter().enumerate() {
        let values = grid.non_empty_values(column);
        if values.is_empty() {
            continue;
        }

        let types: HashSet<ValueType> = values
            .iter()
            .map(|value| ValueType::classify(value, patterns))
            .collect();
        if types.len() > 1 {
            score = score.saturating_sub(MIXED_TYPE_PENALTY);
            issues.push(format!("Column \"{}\" has mixed data types", header));
            recommendations.push(format!("Standardize data format for column \"{}\"", header));
        }

        if has_inconsistent_casing(&values) {
            score = score.saturating_sub(CASING_PENALTY);
            issues.push(format!("Column \"{}\" has inconsistent casing", header));
            recommendations.push(format!("Apply consistent casing rules for \"{}\"", header));
        }
    }

    if issues.is_empty() {
        recommendations.push("Data formats are consistent across all columns".to_string());
    }

    tracing::debug!("Consistency: {} issue(s), score {}", issues.len(), score);

    QualityDimension::scored(DimensionKind::Consistency, score, issues, recommendations)
}

/// Returns true if case-sensitive distinct values outnumber case-folded
/// distinct values by more than the allowed ratio.
fn has_inconsistent_casing(values: &[&str]) -> bool {
    let actual: HashSet<&str> = values.iter().copied().collect();
    let folded: HashSet<String> = values.iter().map(|v| v.to_lowercase()).collect();
    actual.len() as f64 > folded.len() as f64 * CASING_VARIATION_RATIO
}
