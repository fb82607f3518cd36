//! Data models shared by the parser, the analyzers and report renderers.
//!
//! All values are created fresh for every analysis run and never mutated
//! once the analyzer that built them returns.

use serde::{Deserialize, Serialize};

/// Parsed delimited text: row 0 is the header row, every later row is data.
///
/// Rows are not guaranteed to have equal lengths. Accessors treat cells
/// beyond the end of a short row as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates a grid from already split rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns true if the grid holds no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The header row, if any.
    pub fn headers(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Number of header cells (0 for an empty grid).
    pub fn column_count(&self) -> usize {
        self.headers().map_or(0, <[String]>::len)
    }

    /// Data rows (everything after the header).
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Returns true if at least one data row follows the header.
    pub fn has_data_rows(&self) -> bool {
        self.rows.len() >= 2
    }

    /// Trimmed value of each data row for `column`, in row order.
    ///
    /// Absent cells yield `""`.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.data_rows().iter().map(move |row| cell(row, column))
    }

    /// Trimmed, non-empty values of `column`.
    pub fn non_empty_values(&self, column: usize) -> Vec<&str> {
        self.column_values(column)
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Count of data rows whose length differs from the header length.
    pub fn ragged_row_count(&self) -> usize {
        let width = self.column_count();
        self.data_rows()
            .iter()
            .filter(|row| row.len() != width)
            .count()
    }
}

/// Trimmed cell at `column`, or `""` when the row is too short.
pub fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map_or("", |value| value.trim())
}

/// Qualitative rating derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityStatus {
    /// Score of 90 or more
    Excellent,
    /// Score of 75 or more
    Good,
    /// Score of 60 or more
    Fair,
    /// Anything below 60
    Poor,
}

impl QualityStatus {
    /// Classifies a score using the 90/75/60 thresholds.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Lowercase label used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Narrative summary sentence for an overall score in this tier.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "✨ Excellent data quality! Your dataset meets high standards across all dimensions."
            }
            Self::Good => "👍 Good data quality with minor issues that can be easily addressed.",
            Self::Fair => {
                "⚠️ Fair data quality. Several issues need attention to improve reliability."
            }
            Self::Poor => {
                "🚨 Poor data quality. Significant issues detected that require immediate action."
            }
        }
    }
}

impl std::fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one quality dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityDimension {
    /// Display name (e.g. "Completeness")
    pub name: String,
    /// Score in 0-100
    pub score: u8,
    /// Status derived from `score`
    pub status: QualityStatus,
    /// Human-readable problems found
    pub issues: Vec<String>,
    /// Human-readable suggested actions
    pub recommendations: Vec<String>,
}

impl QualityDimension {
    /// Builds a dimension whose status is derived from `score`.
    ///
    /// Scores above 100 are clamped.
    pub fn scored(
        kind: DimensionKind,
        score: u8,
        issues: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        let score = score.min(100);
        Self {
            name: kind.name().to_string(),
            score,
            status: QualityStatus::from_score(score),
            issues,
            recommendations,
        }
    }

    /// Builds the degraded result used when a dimension cannot be assessed.
    pub fn unavailable(
        kind: DimensionKind,
        issue: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self::scored(kind, 0, vec![issue.into()], vec![recommendation.into()])
    }
}

/// The five quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    /// Presence of values
    Completeness,
    /// Uniform types and casing within columns
    Consistency,
    /// Format conformance keyed by header names
    Validity,
    /// Business rules and statistical outliers
    Accuracy,
    /// Duplicate rows and identifiers
    Uniqueness,
}

impl DimensionKind {
    /// All dimensions in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Completeness,
        Self::Consistency,
        Self::Validity,
        Self::Accuracy,
        Self::Uniqueness,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Completeness => "Completeness",
            Self::Consistency => "Consistency",
            Self::Validity => "Validity",
            Self::Accuracy => "Accuracy",
            Self::Uniqueness => "Uniqueness",
        }
    }

    /// Lowercase key used in configuration and serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Completeness => "completeness",
            Self::Consistency => "consistency",
            Self::Validity => "validity",
            Self::Accuracy => "accuracy",
            Self::Uniqueness => "uniqueness",
        }
    }

    /// Parses a lowercase key back into a dimension.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// Per-dimension results of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Completeness result
    pub completeness: QualityDimension,
    /// Consistency result
    pub consistency: QualityDimension,
    /// Validity result
    pub validity: QualityDimension,
    /// Accuracy result
    pub accuracy: QualityDimension,
    /// Uniqueness result
    pub uniqueness: QualityDimension,
}

impl Dimensions {
    /// Iterates the dimensions in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKind, &QualityDimension)> {
        [
            (DimensionKind::Completeness, &self.completeness),
            (DimensionKind::Consistency, &self.consistency),
            (DimensionKind::Validity, &self.validity),
            (DimensionKind::Accuracy, &self.accuracy),
            (DimensionKind::Uniqueness, &self.uniqueness),
        ]
        .into_iter()
    }

    /// Returns the result for one dimension.
    pub fn get(&self, kind: DimensionKind) -> &QualityDimension {
        match kind {
            DimensionKind::Completeness => &self.completeness,
            DimensionKind::Consistency => &self.consistency,
            DimensionKind::Validity => &self.validity,
            DimensionKind::Accuracy => &self.accuracy,
            DimensionKind::Uniqueness => &self.uniqueness,
        }
    }

    /// Unrounded mean of the five scores.
    pub fn mean_score(&self) -> f64 {
        let total: u32 = self.iter().map(|(_, d)| u32::from(d.score)).sum();
        f64::from(total) / DimensionKind::ALL.len() as f64
    }
}

/// Complete outcome of analyzing one delimited text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityResult {
    /// Rounded mean of the five dimension scores
    pub overall_score: u8,
    /// Row count minus the header row
    pub total_records: usize,
    /// Header cell count
    pub total_columns: usize,
    /// Declared name of the analyzed file
    pub file_name: String,
    /// Per-dimension results
    pub dimensions: Dimensions,
    /// Narrative sentence for the overall tier
    pub summary: String,
}

impl DataQualityResult {
    /// Status tier of the overall score.
    pub fn status(&self) -> QualityStatus {
        QualityStatus::from_score(self.overall_score)
    }

    /// Score of one dimension.
    pub fn score_of(&self, kind: DimensionKind) -> u8 {
        self.dimensions.get(kind).score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::new(
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(QualityStatus::from_score(100), QualityStatus::Excellent);
        assert_eq!(QualityStatus::from_score(90), QualityStatus::Excellent);
        assert_eq!(QualityStatus::from_score(89), QualityStatus::Good);
        assert_eq!(QualityStatus::from_score(75), QualityStatus::Good);
        assert_eq!(QualityStatus::from_score(74), QualityStatus::Fair);
        assert_eq!(QualityStatus::from_score(60), QualityStatus::Fair);
        assert_eq!(QualityStatus::from_score(59), QualityStatus::Poor);
        assert_eq!(QualityStatus::from_score(0), QualityStatus::Poor);
    }

    #[test]
    fn test_summary_glyphs() {
        assert!(QualityStatus::Excellent.summary().starts_with('✨'));
        assert!(QualityStatus::Good.summary().starts_with('👍'));
        assert!(QualityStatus::Fair.summary().starts_with('⚠'));
        assert!(QualityStatus::Poor.summary().starts_with('🚨'));
    }

    #[test]
    fn test_grid_accessors() {
        let grid = grid(&[&["id", "name"], &["1", " Alice "], &["2"]]);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.data_rows().len(), 2);
        assert!(grid.has_data_rows());
        assert_eq!(grid.column_values(1).collect::<Vec<_>>(), vec!["Alice", ""]);
        assert_eq!(grid.non_empty_values(1), vec!["Alice"]);
        assert_eq!(grid.ragged_row_count(), 1);
    }

    #[test]
    fn test_grid_empty() {
        let grid = Grid::default();
        assert!(grid.is_empty());
        assert!(grid.headers().is_none());
        assert_eq!(grid.column_count(), 0);
        assert!(grid.data_rows().is_empty());
        assert!(!grid.has_data_rows());
    }

    #[test]
    fn test_header_only_grid_has_no_data_rows() {
        let grid = grid(&[&["a", "b"]]);
        assert!(!grid.has_data_rows());
        assert!(grid.data_rows().is_empty());
    }

    #[test]
    fn test_dimension_scored_clamps_and_derives_status() {
        let dimension = QualityDimension::scored(DimensionKind::Validity, 120, vec![], vec![]);
        assert_eq!(dimension.score, 100);
        assert_eq!(dimension.status, QualityStatus::Excellent);
        assert_eq!(dimension.name, "Validity");

        let dimension =
            QualityDimension::unavailable(DimensionKind::Accuracy, "no data", "add data");
        assert_eq!(dimension.score, 0);
        assert_eq!(dimension.status, QualityStatus::Poor);
        assert_eq!(dimension.issues, vec!["no data".to_string()]);
    }

    #[test]
    fn test_dimension_kind_keys() {
        for kind in DimensionKind::ALL {
            assert_eq!(DimensionKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(
            DimensionKind::from_key(" Accuracy "),
            Some(DimensionKind::Accuracy)
        );
        assert_eq!(DimensionKind::from_key("timeliness"), None);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let dimension = |kind| QualityDimension::scored(kind, 80, vec![], vec![]);
        let result = DataQualityResult {
            overall_score: 80,
            total_records: 3,
            total_columns: 2,
            file_name: "t.csv".to_string(),
            dimensions: Dimensions {
                completeness: dimension(DimensionKind::Completeness),
                consistency: dimension(DimensionKind::Consistency),
                validity: dimension(DimensionKind::Validity),
                accuracy: dimension(DimensionKind::Accuracy),
                uniqueness: dimension(DimensionKind::Uniqueness),
            },
            summary: QualityStatus::Good.summary().to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallScore"], 80);
        assert_eq!(json["totalRecords"], 3);
        assert_eq!(json["fileName"], "t.csv");
        assert_eq!(json["dimensions"]["accuracy"]["status"], "good");
        assert!((result.dimensions.mean_score() - 80.0).abs() < f64::EPSILON);
        assert_eq!(result.status(), QualityStatus::Good);
    }
}
