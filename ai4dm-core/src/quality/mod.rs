//! Data quality assessment module.
//!
//! This module scores a parsed grid across five dimensions:
//! - **Completeness**: Share of cells holding a value
//! - **Consistency**: One value type and one casing per column
//! - **Validity**: Format checks keyed by header names
//! - **Accuracy**: Business rules plus statistical outlier detection
//! - **Uniqueness**: Duplicate rows and duplicate identifiers
//!
//! Each dimension analyzer is a pure function over the same read-only
//! [`Grid`](crate::models::Grid); [`QualityAnalyzer`] runs them and
//! aggregates the overall score.
//!
//! # Example
//! ```rust
//! use ai4dm_core::quality::{IdentifierMatching, QualityAnalyzer, QualityConfig};
//!
//! let config = QualityConfig::new().with_identifier_matching(IdentifierMatching::Token);
//! let analyzer = QualityAnalyzer::new(config);
//! let result = analyzer.analyze("order_id,Paid\n1,yes\n2,yes\n", "orders.csv")?;
//! assert_eq!(result.dimensions.uniqueness.score, 100);
//! # Ok::<(), ai4dm_core::QualityError>(())
//! ```

mod accuracy;
mod analyzer;
mod anomaly;
mod columns;
mod completeness;
mod config;
mod consistency;
mod models;
mod patterns;
mod uniqueness;
mod validity;

// Re-export public API
pub use accuracy::analyze_accuracy;
pub use analyzer::{QualityAnalyzer, analyze_data_quality};
pub use columns::{ColumnRole, HeaderMatcher};
pub use completeness::analyze_completeness;
pub use config::{
    AnomalySensitivity, ConfigValidationError, DimensionThresholds, IdentifierMatching,
    OutlierConfig, QualityConfig,
};
pub use consistency::analyze_consistency;
pub use models::{ThresholdViolation, ViolationSeverity};
pub use patterns::FormatPatterns;
pub use uniqueness::analyze_uniqueness;
pub use validity::analyze_validity;
