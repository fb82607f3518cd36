//! Quality assessment findings.
//!
//! Threshold violations are part of the public API; the row-level findings
//! are intermediate values the dimension analyzers turn into issue text.

use serde::{Deserialize, Serialize};

use crate::numeric::format_number;

/// Severity level for threshold violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    /// Score is below threshold but not critical
    Warning,
    /// Score is significantly below threshold
    Critical,
}

/// A score that fell below its configured minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdViolation {
    /// `overall` or a dimension key
    pub metric: String,
    /// The configured minimum score
    pub threshold: u8,
    /// The actual score
    pub actual: u8,
    /// Severity of the violation
    pub severity: ViolationSeverity,
}

/// Scores below this fraction of the threshold are classified as critical.
const CRITICAL_SEVERITY_RATIO: f64 = 0.8;

impl ThresholdViolation {
    /// Creates a new threshold violation.
    ///
    /// # Severity Classification
    /// - Critical: actual score is below 80% of threshold
    /// - Warning: actual score is between 80% and 100% of threshold
    pub fn new(metric: impl Into<String>, threshold: u8, actual: u8) -> Self {
        let severity = if f64::from(actual) < f64::from(threshold) * CRITICAL_SEVERITY_RATIO {
            ViolationSeverity::Critical
        } else {
            ViolationSeverity::Warning
        };

        Self {
            metric: metric.into(),
            threshold,
            actual,
            severity,
        }
    }
}

/// A single cell that breaks a header-keyed business rule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BusinessRuleViolation {
    /// Header of the offending column
    pub(crate) column: String,
    /// Display message, already prefixed with the row label
    pub(crate) issue: String,
}

/// Which statistical test flagged a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutlierMethod {
    ZScoreAndIqr,
    ZScore,
    Iqr,
}

impl OutlierMethod {
    /// Classifies a value from the two test outcomes; `None` if neither fired.
    pub(crate) fn classify(z_score_outlier: bool, iqr_outlier: bool) -> Option<Self> {
        match (z_score_outlier, iqr_outlier) {
            (true, true) => Some(Self::ZScoreAndIqr),
            (true, false) => Some(Self::ZScore),
            (false, true) => Some(Self::Iqr),
            (false, false) => None,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::ZScoreAndIqr => "z-score & IQR",
            Self::ZScore => "z-score",
            Self::Iqr => "IQR",
        }
    }
}

/// One statistically unusual value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValueOutlier {
    /// 1-based row label counting the header as row 1
    pub(crate) row: usize,
    pub(crate) column: String,
    pub(crate) value: f64,
    pub(crate) method: OutlierMethod,
}

impl ValueOutlier {
    /// Detail line shown under the outlier summary issue.
    pub(crate) fn describe(&self) -> String {
        format!(
            "Row {}, {}: {} ({} outlier)",
            self.row,
            self.column,
            format_number(self.value),
            self.method.label()
        )
    }
}

/// Result of scanning every eligible column for statistical outliers.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct OutlierScan {
    /// Total flagged values across all scanned columns
    pub(crate) outlier_count: usize,
    /// Numeric values in scanned columns (the rate denominator)
    pub(crate) numeric_value_count: usize,
    /// The first few flagged values, in scan order
    pub(crate) details: Vec<ValueOutlier>,
}

impl OutlierScan {
    /// Outliers as a percentage of scanned numeric values.
    pub(crate) fn rate(&self) -> f64 {
        if self.numeric_value_count == 0 {
            return 0.0;
        }
        self.outlier_count as f64 / self.numeric_value_count as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_violation_warning_severity() {
        let violation = ThresholdViolation::new("completeness", 90, 80);
        assert_eq!(violation.severity, ViolationSeverity::Warning);
    }

    #[test]
    fn test_threshold_violation_critical_severity() {
        let violation = ThresholdViolation::new("completeness", 90, 60);
        assert_eq!(violation.severity, ViolationSeverity::Critical);
    }

    #[test]
    fn test_threshold_violation_boundary_severity() {
        // Exactly 80% of threshold is still a warning
        let violation = ThresholdViolation::new("accuracy", 75, 60);
        assert_eq!(violation.severity, ViolationSeverity::Warning);

        let violation = ThresholdViolation::new("accuracy", 75, 59);
        assert_eq!(violation.severity, ViolationSeverity::Critical);
    }

    #[test]
    fn test_threshold_violation_serializes_lowercase_severity() {
        let json = serde_json::to_value(ThresholdViolation::new("overall", 60, 10)).unwrap();
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["metric"], "overall");
    }

    #[test]
    fn test_outlier_method_classification() {
        assert_eq!(
            OutlierMethod::classify(true, true),
            Some(OutlierMethod::ZScoreAndIqr)
        );
        assert_eq!(OutlierMethod::classify(true, false), Some(OutlierMethod::ZScore));
        assert_eq!(OutlierMethod::classify(false, true), Some(OutlierMethod::Iqr));
        assert_eq!(OutlierMethod::classify(false, false), None);
    }

    #[test]
    fn test_value_outlier_description() {
        let outlier = ValueOutlier {
            row: 7,
            column: "Price".to_string(),
            value: 1000.0,
            method: OutlierMethod::Iqr,
        };
        assert_eq!(outlier.describe(), "Row 7, Price: 1000 (IQR outlier)");
    }

    #[test]
    fn test_outlier_scan_rate() {
        let scan = OutlierScan {
            outlier_count: 1,
            numeric_value_count: 8,
            details: vec![],
        };
        assert!((scan.rate() - 12.5).abs() < f64::EPSILON);
        assert_eq!(OutlierScan::default().rate(), 0.0);
    }
}
