//! Quality assessment configuration.
//!
//! Defaults use 3σ z-score and 1.5×IQR outlier fences, substring matching
//! for identifier columns, and a "fair" (60) minimum for threshold reporting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::DimensionKind;

/// Anomaly detection sensitivity level.
///
/// Controls how many standard deviations from the mean a value
/// must be to be considered an outlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySensitivity {
    /// 3.5 standard deviations - fewer false positives
    Low,
    /// 3.0 standard deviations - default
    #[default]
    Medium,
    /// 2.5 standard deviations - more aggressive detection
    High,
}

impl AnomalySensitivity {
    /// Returns the z-score threshold for this sensitivity level.
    pub fn z_score_threshold(&self) -> f64 {
        match self {
            AnomalySensitivity::Low => 3.5,
            AnomalySensitivity::Medium => 3.0,
            AnomalySensitivity::High => 2.5,
        }
    }
}

/// Statistical outlier configuration for the accuracy dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Enable statistical outlier detection
    pub enabled: bool,
    /// Z-score sensitivity
    pub sensitivity: AnomalySensitivity,
    /// Width of the Tukey fences in IQRs
    pub iqr_multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sensitivity: AnomalySensitivity::Medium,
            iqr_multiplier: 1.5,
        }
    }
}

impl OutlierConfig {
    /// Creates a new outlier config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable/disable outlier detection.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set sensitivity level.
    pub fn with_sensitivity(mut self, sensitivity: AnomalySensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Builder method to set the IQR fence multiplier.
    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = multiplier;
        self
    }
}

/// How identifier columns are recognized from their header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierMatching {
    /// Header contains `id`, `key` or `email` anywhere (case-insensitive).
    /// Matches "Identity Theft Count" too.
    #[default]
    Substring,
    /// One of the header's word tokens equals `id`, `key` or `email`.
    Token,
}

/// Minimum acceptable scores (0-100) used for threshold reporting.
///
/// Thresholds never change the scores themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionThresholds {
    /// Minimum overall score
    pub overall_min: u8,
    /// Minimum completeness score
    pub completeness_min: u8,
    /// Minimum consistency score
    pub consistency_min: u8,
    /// Minimum validity score
    pub validity_min: u8,
    /// Minimum accuracy score
    pub accuracy_min: u8,
    /// Minimum uniqueness score
    pub uniqueness_min: u8,
}

/// Score at which a dataset stops being "fair".
const DEFAULT_MIN_SCORE: u8 = 60;

impl Default for DimensionThresholds {
    fn default() -> Self {
        Self {
            overall_min: DEFAULT_MIN_SCORE,
            completeness_min: DEFAULT_MIN_SCORE,
            consistency_min: DEFAULT_MIN_SCORE,
            validity_min: DEFAULT_MIN_SCORE,
            accuracy_min: DEFAULT_MIN_SCORE,
            uniqueness_min: DEFAULT_MIN_SCORE,
        }
    }
}

impl DimensionThresholds {
    /// Returns the minimum for one dimension.
    pub fn min_for(&self, kind: DimensionKind) -> u8 {
        match kind {
            DimensionKind::Completeness => self.completeness_min,
            DimensionKind::Consistency => self.consistency_min,
            DimensionKind::Validity => self.validity_min,
            DimensionKind::Accuracy => self.accuracy_min,
            DimensionKind::Uniqueness => self.uniqueness_min,
        }
    }

    /// Builder method to set the minimum for one dimension.
    pub fn with_min(mut self, kind: DimensionKind, threshold: u8) -> Self {
        let threshold = clamp_threshold(kind.key(), threshold);
        match kind {
            DimensionKind::Completeness => self.completeness_min = threshold,
            DimensionKind::Consistency => self.consistency_min = threshold,
            DimensionKind::Validity => self.validity_min = threshold,
            DimensionKind::Accuracy => self.accuracy_min = threshold,
            DimensionKind::Uniqueness => self.uniqueness_min = threshold,
        }
        self
    }

    /// Builder method to set the overall minimum.
    pub fn with_overall_min(mut self, threshold: u8) -> Self {
        self.overall_min = clamp_threshold("overall", threshold);
        self
    }
}

fn clamp_threshold(metric: &str, threshold: u8) -> u8 {
    if threshold > 100 {
        tracing::warn!(
            "{}_min {} clamped to valid range [0, 100]",
            metric,
            threshold
        );
    }
    threshold.min(100)
}

/// Quality assessment configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Statistical outlier settings
    pub outliers: OutlierConfig,
    /// Identifier column recognition strategy
    pub identifier_matching: IdentifierMatching,
    /// Minimum scores for threshold reporting
    pub thresholds: DimensionThresholds,
}

/// Validation errors for quality configuration.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    /// A minimum score above 100
    #[error("{metric}_min must be between 0 and 100, got {value}")]
    InvalidThreshold {
        /// `overall` or a dimension key
        metric: &'static str,
        /// The rejected value
        value: u8,
    },
    /// An IQR multiplier that cannot form fences
    #[error("iqr_multiplier must be a positive finite number, got {0}")]
    InvalidIqrMultiplier(f64),
}

impl QualityConfig {
    /// Creates a new quality config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set outlier detection config.
    pub fn with_outliers(mut self, config: OutlierConfig) -> Self {
        self.outliers = config;
        self
    }

    /// Builder method to set the identifier matching strategy.
    pub fn with_identifier_matching(mut self, matching: IdentifierMatching) -> Self {
        self.identifier_matching = matching;
        self
    }

    /// Builder method to set the score thresholds.
    pub fn with_thresholds(mut self, thresholds: DimensionThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns an error if any threshold is outside valid range or the IQR
    /// multiplier cannot form fences.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let thresholds = &self.thresholds;
        if thresholds.overall_min > 100 {
            return Err(ConfigValidationError::InvalidThreshold {
                metric: "overall",
                value: thresholds.overall_min,
            });
        }
        for kind in DimensionKind::ALL {
            let value = thresholds.min_for(kind);
            if value > 100 {
                return Err(ConfigValidationError::InvalidThreshold {
                    metric: kind.key(),
                    value,
                });
            }
        }

        let multiplier = self.outliers.iqr_multiplier;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(multiplier));
        }
        Ok(())
    }
}
