//! Validity analysis for data quality assessment.
//!
//! Columns are checked against a format chosen from their header name.
//! A header can select several formats; each selected format validates
//! every non-empty value again.

use crate::models::{DimensionKind, Grid, QualityDimension};
use crate::numeric::{format_percent, parse_number, to_score};

use super::columns::ColumnRole;
use super::patterns::FormatPatterns;

/// Pass/fail counts for one format check on one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    checked: usize,
    passed: usize,
}

impl Tally {
    fn run(values: &[&str], check: impl Fn(&str) -> bool) -> Self {
        let passed = values.iter().filter(|value| check(value)).count();
        Self {
            checked: values.len(),
            passed,
        }
    }

    fn has_failures(&self) -> bool {
        self.passed < self.checked
    }

    fn invalid_rate(&self) -> f64 {
        if self.checked == 0 {
            return 0.0;
        }
        self.checked.saturating_sub(self.passed) as f64 / self.checked as f64 * 100.0
    }
}

/// Analyzes validity of the data rows.
///
/// The score is the rounded share of passed checks across all columns, or
/// 100 when no header selects a format.
pub fn analyze_validity(grid: &Grid) -> QualityDimension {
    let Some(headers) = grid.headers().filter(|_| grid.has_data_rows()) else {
        return QualityDimension::unavailable(
            DimensionKind::Validity,
            "No data to validate",
            "Add data rows for validation",
        );
    };

    let patterns = FormatPatterns::instance();
    let mut total = Tally::default();
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    for (column, header) in headers.iter().enumerate() {
        let values = grid.non_empty_values(column);
        let mut tallies = Vec::new();

        if ColumnRole::Email.matches(header) {
            let tally = Tally::run(&values, |v| patterns.is_email(v));
            if tally.has_failures() {
                issues.push(format!(
                    "{}: {}% invalid email formats",
                    header,
                    format_percent(tally.invalid_rate())
                ));
                recommendations.push(format!("Validate email format at entry for \"{}\"", header));
            }
            tallies.push(tally);
        }

        if ColumnRole::Date.matches(header) {
            tallies.push(Tally::run(&values, |v| patterns.is_date(v)));
        }

        if ColumnRole::Phone.matches(header) {
            let tally = Tally::run(&values, |v| patterns.is_phone(v));
            if tally.has_failures() {
                issues.push(format!("{}: Invalid phone number formats detected", header));
                recommendations.push(format!(
                    "Standardize phone number format for \"{}\"",
                    header
                ));
            }
            tallies.push(tally);
        }

        if ColumnRole::NonNegative.matches(header) {
            tallies.push(Tally::run(&values, |v| {
                parse_number(v).is_some_and(|n| n >= 0.0)
            }));
        }

        for tally in tallies {
            total.checked = total.checked.saturating_add(tally.checked);
            total.passed = total.passed.saturating_add(tally.passed);
        }
    }

    let score = if total.checked > 0 {
        to_score(total.passed as f64 / total.checked as f64 * 100.0)
    } else {
        100
    };

    if issues.is_empty() {
        recommendations.push("All validated fields meet expected formats".to_string());
    }

    tracing::debug!(
        "Validity: {}/{} checks passed",
        total.passed,
        total.checked
    );

    QualityDimension::scored(DimensionKind::Validity, score, issues, recommendations)
}
