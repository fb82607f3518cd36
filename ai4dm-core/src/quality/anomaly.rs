//! Anomaly detection for data quality assessment.
//!
//! This module flags statistical outliers in numeric columns using a
//! z-score test and Tukey fences together.

use crate::models::Grid;
use crate::numeric::parse_currency_or_zero;
use crate::stats;

use super::config::OutlierConfig;
use super::models::{OutlierMethod, OutlierScan, ValueOutlier};

/// Columns need more than this many numeric values to be scanned.
const MIN_NUMERIC_VALUES: usize = 3;

/// Maximum flagged values kept as detail lines.
const MAX_OUTLIER_DETAILS: usize = 5;

/// Scans every column for statistical outliers.
///
/// Cells are parsed as currency (`$` and `,` removed). Blank cells read
/// as zero and non-numeric cells are skipped. A value is an outlier if its z-score
/// exceeds the configured sensitivity or it falls outside the IQR fences.
pub(crate) fn scan_outliers(grid: &Grid, config: &OutlierConfig) -> OutlierScan {
    let Some(headers) = grid.headers() else {
        return OutlierScan::default();
    };

    let z_threshold = config.sensitivity.z_score_threshold();
    let mut scan = OutlierScan::default();

    for (column, header) in headers.iter().enumerate() {
        let values: Vec<(usize, f64)> = grid
            .column_values(column)
            .enumerate()
            .filter_map(|(index, value)| parse_currency_or_zero(value).map(|n| (index, n)))
            .collect();

        // Need enough values for meaningful statistics
        if values.len() <= MIN_NUMERIC_VALUES {
            continue;
        }

        scan.numeric_value_count = scan.numeric_value_count.saturating_add(values.len());

        let numbers: Vec<f64> = values.iter().map(|(_, n)| *n).collect();
        let mean = stats::mean(&numbers);
        let std_dev = stats::population_std_dev(&numbers, mean);
        let bounds = stats::quartile_bounds(&stats::sorted(&numbers), config.iqr_multiplier);

        for &(index, value) in &values {
            let z_score_outlier = stats::z_score(value, mean, std_dev) > z_threshold;
            let Some(method) = OutlierMethod::classify(z_score_outlier, bounds.is_outside(value))
            else {
                continue;
            };

            scan.outlier_count = scan.outlier_count.saturating_add(1);
            if scan.details.len() < MAX_OUTLIER_DETAILS {
                scan.details.push(ValueOutlier {
                    row: index.saturating_add(2),
                    column: header.clone(),
                    value,
                    method,
                });
            }
        }
    }

    tracing::trace!(
        "Outlier scan: {} of {} numeric values flagged",
        scan.outlier_count,
        scan.numeric_value_count
    );
    scan
}
