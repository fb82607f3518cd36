//! Core data structures and analyzers for AI4DM data quality assessment.
//!
//! This crate turns the raw text of a comma-separated file into a
//! [`models::Grid`] and scores it across five heuristic quality dimensions:
//! completeness, consistency, validity, accuracy and uniqueness.
//!
//! # Guarantees
//! - Pure computation: no file, network or clock access inside the analyzers
//! - Deterministic: identical input text always yields an identical result
//! - Every analysis builds fresh values; nothing is shared between calls
//!
//! # Example
//! ```rust
//! use ai4dm_core::analyze_data_quality;
//!
//! let result = analyze_data_quality("Name,Age\nAlice,30\nBob,41\n", "people.csv")?;
//! assert_eq!(result.total_records, 2);
//! assert_eq!(result.total_columns, 2);
//! # Ok::<(), ai4dm_core::QualityError>(())
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod numeric;
pub mod parser;
pub mod quality;
pub mod stats;

// Re-export commonly used types
pub use error::{QualityError, Result};
pub use logging::init_logging;
pub use models::{
    DataQualityResult, DimensionKind, Dimensions, Grid, QualityDimension, QualityStatus,
};
pub use parser::parse_delimited;
pub use quality::{
    AnomalySensitivity, ConfigValidationError, DimensionThresholds, IdentifierMatching,
    OutlierConfig, QualityAnalyzer, QualityConfig, ThresholdViolation, ViolationSeverity,
    analyze_data_quality,
};
