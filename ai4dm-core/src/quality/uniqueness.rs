//! Uniqueness analysis for data quality assessment.
//!
//! This module analyzes duplicate values at both row level and for
//! columns whose header suggests an identifier.

use std::collections::HashSet;

use crate::models::{DimensionKind, Grid, QualityDimension};
use crate::numeric::{format_percent, to_score};

use super::columns::HeaderMatcher;

/// Cap on the duplicate-row deduction.
const MAX_ROW_PENALTY: f64 = 30.0;

/// Cap on the deduction for each identifier column.
const MAX_COLUMN_PENALTY: f64 = 20.0;

/// Analyzes uniqueness of the data rows.
///
/// Rows are compared cell by cell, so two rows are duplicates only if they
/// have the same number of cells with the same trimmed contents.
pub fn analyze_uniqueness(grid: &Grid, matcher: &HeaderMatcher) -> QualityDimension {
    let Some(headers) = grid.headers().filter(|_| grid.has_data_rows()) else {
        return QualityDimension::unavailable(
            DimensionKind::Uniqueness,
            "No data to analyze",
            "Add data rows",
        );
    };

    let rows = grid.data_rows();
    let mut score: f64 = 100.0;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let duplicate_rows = count_duplicate_rows(rows);
    if duplicate_rows > 0 {
        let duplicate_rate = duplicate_rows as f64 / rows.len() as f64 * 100.0;
        score -= MAX_ROW_PENALTY.min(duplicate_rate);
        issues.push(format!(
            "{} duplicate rows found ({}%)",
            duplicate_rows,
            format_percent(duplicate_rate)
        ));
        recommendations.push("Remove duplicate records to ensure data integrity".to_string());
    }

    for (column, header) in headers.iter().enumerate() {
        if !matcher.is_identifier(header) {
            continue;
        }

        let values = grid.non_empty_values(column);
        let distinct: HashSet<&str> = values.iter().copied().collect();
        let duplicate_count = values.len().saturating_sub(distinct.len());
        if duplicate_count == 0 {
            continue;
        }

        let duplicate_rate = duplicate_count as f64 / values.len() as f64 * 100.0;
        score -= MAX_COLUMN_PENALTY.min(duplicate_rate);
        issues.push(format!(
            "Column \"{}\" has {} duplicates (expected to be unique)",
            header, duplicate_count
        ));
        recommendations.push(format!("Enforce uniqueness constraint on \"{}\"", header));
    }

    if issues.is_empty() {
        recommendations.push("No duplicate records detected - excellent data integrity".to_string());
    }

    tracing::debug!(
        "Uniqueness: {} duplicate row(s), score {:.1}",
        duplicate_rows,
        score
    );

    QualityDimension::scored(DimensionKind::Uniqueness, to_score(score), issues, recommendations)
}

/// Counts rows whose content already appeared earlier.
fn count_duplicate_rows(rows: &[Vec<String>]) -> usize {
    let distinct: HashSet<&[String]> = rows.iter().map(Vec::as_slice).collect();
    rows.len().saturating_sub(distinct.len())
}
