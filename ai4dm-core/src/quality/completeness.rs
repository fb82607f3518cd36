//! Completeness analysis for data quality assessment.
//!
//! This module measures how many data cells actually hold a value and
//! flags columns that are mostly empty.

use crate::models::{DimensionKind, Grid, QualityDimension};
use crate::numeric::{format_percent, to_score};

/// Placeholder tokens treated as missing (case-sensitive).
const MISSING_TOKENS: [&str; 3] = ["null", "NA", "N/A"];

/// Share of unfilled cells above which a column is reported as mostly empty.
const EMPTY_COLUMN_RATIO: f64 = 0.5;

/// Overall missing percentage above which an issue is raised.
const MISSING_RATE_LIMIT: f64 = 10.0;

/// Maximum column names listed in the mostly-empty issue.
const LISTED_COLUMNS: usize = 3;

/// Returns true if a trimmed cell holds a usable value.
fn is_filled(value: &str) -> bool {
    !value.is_empty() && !MISSING_TOKENS.contains(&value)
}

/// Analyzes completeness of the data rows.
///
/// Every header column is checked against every data row; short rows count
/// their absent cells as missing. The score is the rounded percentage of
/// filled cells.
pub fn analyze_completeness(grid: &Grid) -> QualityDimension {
    let Some(headers) = grid.headers().filter(|_| grid.has_data_rows()) else {
        return QualityDimension::unavailable(
            DimensionKind::Completeness,
            "No data rows found",
            "Ensure the file contains data beyond headers",
        );
    };

    let row_count = grid.data_rows().len();
    let mut total_cells: usize = 0;
    let mut filled_cells: usize = 0;
    let mut empty_columns: Vec<&str> = Vec::new();

    for (column, header) in headers.iter().enumerate() {
        let filled = grid.column_values(column).filter(|v| is_filled(v)).count();
        total_cells = total_cells.saturating_add(row_count);
        filled_cells = filled_cells.saturating_add(filled);

        let missing = row_count.saturating_sub(filled);
        if missing as f64 > row_count as f64 * EMPTY_COLUMN_RATIO {
            empty_columns.push(header);
        }
    }

    if total_cells == 0 {
        return QualityDimension::unavailable(
            DimensionKind::Completeness,
            "No data rows found",
            "Ensure the file contains data beyond headers",
        );
    }

    let completeness_rate = filled_cells as f64 / total_cells as f64 * 100.0;
    let missing_rate = total_cells.saturating_sub(filled_cells) as f64 / total_cells as f64 * 100.0;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if !empty_columns.is_empty() {
        let listed = empty_columns
            .iter()
            .take(LISTED_COLUMNS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if empty_columns.len() > LISTED_COLUMNS {
            "..."
        } else {
            ""
        };
        issues.push(format!(
            "{} column(s) have >50% missing values: {}{}",
            empty_columns.len(),
            listed,
            ellipsis
        ));
        recommendations.push("Review data collection processes for these columns".to_string());
    }

    if missing_rate > MISSING_RATE_LIMIT {
        issues.push(format!("{}% of cells are empty", format_percent(missing_rate)));
        recommendations.push("Implement validation rules at data entry points".to_string());
    }

    if filled_cells == total_cells {
        recommendations.push("Excellent! All fields are populated".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Maintain current data collection standards".to_string());
    }

    tracing::debug!(
        "Completeness: {}/{} cells filled, {} mostly-empty column(s)",
        filled_cells,
        total_cells,
        empty_columns.len()
    );

    QualityDimension::scored(
        DimensionKind::Completeness,
        to_score(completeness_rate),
        issues,
        recommendations,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QualityStatus;
    use crate::parser::parse_delimited;

    #[test]
    fn test_completeness_all_present() {
        let grid = parse_delimited("id,name\n1,Alice\n2,Bob\n");
        let dimension = analyze_completeness(&grid);

        assert_eq!(dimension.score, 100);
        assert_eq!(dimension.status, QualityStatus::Excellent);
        assert!(dimension.issues.is_empty());
        assert_eq!(
            dimension.recommendations,
            vec!["Excellent! All fields are populated"]
        );
    }

    #[test]
    fn test_completeness_quarter_missing() {
        let grid = parse_delimited("a,b\n1,\n2,3\n");
        let dimension = analyze_completeness(&grid);

        assert_eq!(dimension.score, 75);
        assert_eq!(dimension.status, QualityStatus::Good);
        // b is exactly 50% empty, which is not more than half
        assert_eq!(dimension.issues, vec!["25.0% of cells are empty"]);
        assert_eq!(
            dimension.recommendations,
            vec!["Implement validation rules at data entry points"]
        );
    }

    #[test]
    fn test_completeness_missing_tokens() {
        let grid = parse_delimited("a,b,c,d\nnull,NA,N/A,x\nnull,NA,N/A,y\n");
        let dimension = analyze_completeness(&grid);

        assert_eq!(dimension.score, 25);
        assert_eq!(
            dimension.issues[0],
            "3 column(s) have >50% missing values: a, b, c"
        );
        assert_eq!(dimension.issues[1], "75.0% of cells are empty");
    }

    #[test]
    fn test_completeness_tokens_are_case_sensitive() {
        let grid = parse_delimited("a\nNULL\nn/a\n");
        assert_eq!(analyze_completeness(&grid).score, 100);
    }

    #[test]
    fn test_completeness_lists_at_most_three_columns() {
        let grid = parse_delimited("a,b,c,d,e\n,,,,x\n");
        let dimension = analyze_completeness(&grid);

        assert_eq!(
            dimension.issues[0],
            "4 column(s) have >50% missing values: a, b, c..."
        );
    }

    #[test]
    fn test_completeness_short_rows_count_as_missing() {
        let grid = parse_delimited("a,b\n1\n2,3\n");
        let dimension = analyze_completeness(&grid);

        assert_eq!(dimension.score, 75);
    }

    #[test]
    fn test_completeness_small_gap_keeps_default_recommendation() {
        let mut content = String::from("a\n");
        for i in 0..19 {
            content.push_str(&format!("{i}\n"));
        }
        content.push_str("\"\"\n");
        let dimension = analyze_completeness(&parse_delimited(&content));

        assert_eq!(dimension.score, 95);
        assert!(dimension.issues.is_empty());
        assert_eq!(
            dimension.recommendations,
            vec!["Maintain current data collection standards"]
        );
    }

    #[test]
    fn test_completeness_header_only() {
        let dimension = analyze_completeness(&parse_delimited("a,b"));

        assert_eq!(dimension.score, 0);
        assert_eq!(dimension.status, QualityStatus::Poor);
        assert_eq!(dimension.issues, vec!["No data rows found"]);
        assert_eq!(
            dimension.recommendations,
            vec!["Ensure the file contains data beyond headers"]
        );
    }
}
