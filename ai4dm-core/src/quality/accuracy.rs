//! Accuracy analysis for data quality assessment.
//!
//! Accuracy combines header-keyed business rules (plausible ages,
//! non-negative money and counts, no extreme prices) with the statistical
//! outlier scan. Row labels count the header as row 1, so the first data
//! row is "Row 2". Blank cells read as zero in every accuracy check.

use crate::models::{DimensionKind, Grid, QualityDimension};
use crate::numeric::{
    format_grouped, format_number, format_percent, parse_currency_or_zero, parse_number_or_zero,
    to_score,
};
use crate::stats;

use super::anomaly::scan_outliers;
use super::columns::ColumnRole;
use super::config::OutlierConfig;
use super::models::BusinessRuleViolation;

/// Score before any deductions.
const BASE_SCORE: f64 = 95.0;

/// Cap on the business rule deduction.
const MAX_RULE_PENALTY: f64 = 35.0;

/// Cap on the statistical outlier deduction.
const MAX_OUTLIER_PENALTY: f64 = 20.0;

/// Outlier percentage that must be exceeded before it affects the score.
const OUTLIER_RATE_LIMIT: f64 = 2.0;

/// Violation messages listed per column before summarizing the rest.
const LISTED_VIOLATIONS: usize = 3;

const MIN_EXPECTED_AGE: f64 = 16.0;
const MAX_EXPECTED_AGE: f64 = 100.0;

/// Multiple of the column median above which an amount is an extreme outlier.
const EXTREME_MEDIAN_MULTIPLE: f64 = 3.0;

/// Analyzes accuracy of the data rows.
pub fn analyze_accuracy(grid: &Grid, outliers: &OutlierConfig) -> QualityDimension {
    if !grid.has_data_rows() {
        return QualityDimension::unavailable(
            DimensionKind::Accuracy,
            "Insufficient data for accuracy assessment",
            "Accuracy requires reference data or business rules",
        );
    }

    let mut score = BASE_SCORE;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let violations = check_business_rules(grid);
    if !violations.is_empty() {
        let row_count = grid.data_rows().len();
        let violation_rate = violations.len() as f64 / row_count as f64 * 100.0;
        score -= MAX_RULE_PENALTY.min(violation_rate * 2.0);

        for (column, column_violations) in group_by_column(&violations) {
            issues.extend(
                column_violations
                    .iter()
                    .take(LISTED_VIOLATIONS)
                    .map(|v| v.issue.clone()),
            );
            if column_violations.len() > LISTED_VIOLATIONS {
                issues.push(format!(
                    "... and {} more violations in {}",
                    column_violations.len().saturating_sub(LISTED_VIOLATIONS),
                    column
                ));
            }
            recommendations.push(format!("Review and correct invalid values in \"{}\"", column));
        }
    }

    if outliers.enabled {
        let scan = scan_outliers(grid, outliers);
        let outlier_rate = scan.rate();
        if scan.outlier_count > 0 && outlier_rate > OUTLIER_RATE_LIMIT {
            score -= MAX_OUTLIER_PENALTY.min(outlier_rate * 1.5);
            issues.push(format!(
                "{} statistical outliers detected ({}% of numeric data)",
                scan.outlier_count,
                format_percent(outlier_rate)
            ));
            issues.extend(scan.details.iter().map(|outlier| outlier.describe()));
            recommendations
                .push("Review outliers for data entry errors or legitimate edge cases".to_string());
        }
    } else {
        tracing::debug!("Statistical outlier detection disabled");
    }

    if issues.is_empty() {
        issues.push(
            "No accuracy issues detected based on business rules and statistical analysis"
                .to_string(),
        );
        recommendations
            .push("Continue monitoring data quality with established validation rules".to_string());
    } else {
        recommendations
            .push("Implement data validation at entry points to prevent invalid values".to_string());
        recommendations.push("Consider establishing automated business rule checks".to_string());
    }

    tracing::debug!(
        "Accuracy: {} business rule violation(s), score {:.1}",
        violations.len(),
        score
    );

    QualityDimension::scored(DimensionKind::Accuracy, to_score(score), issues, recommendations)
}

/// Applies the header-keyed business rules to every column.
///
/// Violations come out column by column; within a column, age rules come
/// first, then financial rules, then count rules.
pub(crate) fn check_business_rules(grid: &Grid) -> Vec<BusinessRuleViolation> {
    let Some(headers) = grid.headers() else {
        return Vec::new();
    };

    let mut violations = Vec::new();
    for (column, header) in headers.iter().enumerate() {
        if ColumnRole::Age.matches(header) {
            check_ages(grid, column, header, &mut violations);
        }
        if ColumnRole::Financial.matches(header) {
            check_amounts(grid, column, header, &mut violations);
        }
        if ColumnRole::Count.matches(header) {
            check_counts(grid, column, header, &mut violations);
        }
    }
    violations
}

/// Numeric cells of a column with their 1-based row labels.
///
/// Row labels count the header as row 1.
fn labeled_values(
    grid: &Grid,
    column: usize,
    parse: fn(&str) -> Option<f64>,
) -> Vec<(usize, f64)> {
    grid.column_values(column)
        .enumerate()
        .filter_map(|(index, value)| parse(value).map(|n| (index.saturating_add(2), n)))
        .collect()
}

fn check_ages(grid: &Grid, column: usize, header: &str, out: &mut Vec<BusinessRuleViolation>) {
    for (row, age) in labeled_values(grid, column, parse_number_or_zero) {
        let problem = if age < 0.0 {
            "is negative (impossible)"
        } else if age < MIN_EXPECTED_AGE {
            "is below minimum expected value (< 16)"
        } else if age > MAX_EXPECTED_AGE {
            "exceeds biological limits (> 100)"
        } else {
            continue;
        };
        out.push(BusinessRuleViolation {
            column: header.to_string(),
            issue: format!("Row {}: Age {} {}", row, format_number(age), problem),
        });
    }
}

fn check_amounts(grid: &Grid, column: usize, header: &str, out: &mut Vec<BusinessRuleViolation>) {
    let values = labeled_values(grid, column, parse_currency_or_zero);

    for &(row, value) in &values {
        if value < 0.0 {
            out.push(BusinessRuleViolation {
                column: header.to_string(),
                issue: format!(
                    "Row {}: {} {} is negative (invalid for financial data)",
                    row,
                    header,
                    format_number(value)
                ),
            });
        }
    }

    let numbers: Vec<f64> = values.iter().map(|(_, n)| *n).collect();
    let Some(median) = stats::median(&stats::sorted(&numbers)) else {
        return;
    };
    if median <= 0.0 {
        return;
    }

    for &(row, value) in &values {
        if value > median * EXTREME_MEDIAN_MULTIPLE {
            out.push(BusinessRuleViolation {
                column: header.to_string(),
                issue: format!(
                    "Row {}: {} ${} is an extreme outlier (>3x median of ${})",
                    row,
                    header,
                    format_grouped(value),
                    format_grouped(median)
                ),
            });
        }
    }
}

fn check_counts(grid: &Grid, column: usize, header: &str, out: &mut Vec<BusinessRuleViolation>) {
    for (row, value) in labeled_values(grid, column, parse_number_or_zero) {
        if value < 0.0 {
            out.push(BusinessRuleViolation {
                column: header.to_string(),
                issue: format!(
                    "Row {}: {} {} is negative (should be positive)",
                    row,
                    header,
                    format_number(value)
                ),
            });
        }
    }
}

/// Groups violations by column name, keeping first-seen column order.
fn group_by_column(
    violations: &[BusinessRuleViolation],
) -> Vec<(&str, Vec<&BusinessRuleViolation>)> {
    let mut groups: Vec<(&str, Vec<&BusinessRuleViolation>)> = Vec::new();
    for violation in violations {
        match groups
            .iter_mut()
            .find(|(column, _)| *column == violation.column)
        {
            Some((_, group)) => group.push(violation),
            None => groups.push((violation.column.as_str(), vec![violation])),
        }
    }
    groups
}
