//! End-to-end quality assessment scenarios.
//!
//! Each test feeds raw text through the public API and checks the exact
//! scores and messages a user would see.
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use ai4dm_core::quality::{
    AnomalySensitivity, DimensionThresholds, IdentifierMatching, OutlierConfig, QualityAnalyzer,
    QualityConfig, ViolationSeverity,
};
use ai4dm_core::{DimensionKind, QualityStatus, analyze_data_quality, parse_delimited};

#[test]
fn test_people_with_implausible_ages() {
    let result =
        analyze_data_quality("Name,Age\nAlice,30\nBob,-1\nCara,200\n", "people.csv").unwrap();

    assert_eq!(result.total_records, 3);
    assert_eq!(result.total_columns, 2);

    let accuracy = &result.dimensions.accuracy;
    assert_eq!(accuracy.score, 60);
    assert_eq!(accuracy.status, QualityStatus::Fair);
    assert!(accuracy.issues.iter().any(|i| i.starts_with("Row 3: Age -1")));
    assert!(accuracy.issues.iter().any(|i| i.starts_with("Row 4: Age 200")));
}

#[test]
fn test_age_violations_keep_row_labels() {
    let result = analyze_data_quality("Age\n-5\n15\n50\n150\n", "ages.csv").unwrap();
    let issues = &result.dimensions.accuracy.issues;

    assert_eq!(issues[0], "Row 2: Age -5 is negative (impossible)");
    assert_eq!(
        issues[1],
        "Row 3: Age 15 is below minimum expected value (< 16)"
    );
    assert_eq!(issues[2], "Row 5: Age 150 exceeds biological limits (> 100)");
}

#[test]
fn test_completeness_quarter_missing_is_good() {
    let result = analyze_data_quality("a,b\n1,\n2,3\n", "gaps.csv").unwrap();
    let completeness = &result.dimensions.completeness;

    assert_eq!(completeness.score, 75);
    assert_eq!(completeness.status, QualityStatus::Good);
}

#[test]
fn test_one_duplicate_row_in_four() {
    let result = analyze_data_quality("name,city\nA,X\nB,Y\nA,X\nC,Z\n", "dupes.csv").unwrap();
    let uniqueness = &result.dimensions.uniqueness;

    assert_eq!(uniqueness.score, 75);
    assert_eq!(uniqueness.issues.len(), 1);
}

#[test]
fn test_empty_and_blank_input_is_rejected() {
    for content in ["", "\n\n", "   \n\t\n"] {
        let err = analyze_data_quality(content, "empty.csv").unwrap_err();
        assert!(err.is_empty_input(), "expected empty input for {content:?}");
    }
}

#[test]
fn test_header_only_file_scores_zero() {
    let result = analyze_data_quality("id,name,email\n", "header.csv").unwrap();

    assert_eq!(result.total_records, 0);
    assert_eq!(result.overall_score, 0);
    assert_eq!(result.status(), QualityStatus::Poor);
    assert!(result.summary.starts_with('🚨'));
    assert_eq!(
        result.dimensions.completeness.issues,
        vec!["No data rows found"]
    );
    assert_eq!(
        result.dimensions.uniqueness.issues,
        vec!["No data to analyze"]
    );
}

#[test]
fn test_clean_customer_file_is_excellent() {
    let content = "\
customer_id,email,phone,signup_date,age
1,alice@example.com,(555) 123-4567,2024-01-15,34
2,bob@example.com,555-987-6543,2024-02-01,41
3,cara@example.com,+1 555 222 3333,2024-02-17,29
4,dan@example.com,555 444 3333,2024-03-09,52
";
    let result = analyze_data_quality(content, "customers.csv").unwrap();

    for (kind, dimension) in result.dimensions.iter() {
        assert!(
            dimension.score >= 90,
            "{} scored {}: {:?}",
            kind.name(),
            dimension.score,
            dimension.issues
        );
    }
    assert_eq!(result.status(), QualityStatus::Excellent);
    assert!(result.summary.starts_with('✨'));
}

#[test]
fn test_messy_orders_file() {
    let content = "\
order_id,Customer Email,Status,Price,Quantity
1001,ann@shop.com,Shipped,19.99,2
1002,not-an-email,shipped,24.50,1
1002,ben@shop.com,SHIPPED,\"$1,999.00\",-3
1003,,pending,21.00,
1004,cy@shop.com,Pending,18.75,4
";
    let result = analyze_data_quality(content, "orders.csv").unwrap();
    let dims = &result.dimensions;

    assert!(
        dims.validity
            .issues
            .contains(&"Customer Email: 25.0% invalid email formats".to_string())
    );
    assert!(
        dims.uniqueness
            .issues
            .contains(&"Column \"order_id\" has 1 duplicates (expected to be unique)".to_string())
    );
    assert!(
        dims.consistency
            .issues
            .contains(&"Column \"Status\" has inconsistent casing".to_string())
    );
    assert!(
        dims.accuracy
            .issues
            .contains(&"Row 4: Quantity -3 is negative (should be positive)".to_string())
    );
    assert!(dims.accuracy.issues.iter().any(|i| i.contains("$1,999 is an extreme outlier")));
    assert!(result.overall_score < 90);
}

#[test]
fn test_quoted_cells_and_ragged_rows() {
    let content = "name,notes,amount\n\"Smith, J\",\"a, b\",10\nLee\n";
    let grid = parse_delimited(content);

    assert_eq!(grid.rows()[1], vec!["Smith, J", "a, b", "10"]);
    assert_eq!(grid.ragged_row_count(), 1);

    let result = analyze_data_quality(content, "ragged.csv").unwrap();
    // Lee's row is missing two of three cells
    assert_eq!(result.dimensions.completeness.score, 67);
}

#[test]
fn test_token_matching_avoids_false_identifier() {
    let content = "Identity Theft Count,Name\n0,A\n0,B\n1,C\n";

    let loose = QualityAnalyzer::with_defaults()
        .analyze(content, "t.csv")
        .unwrap();
    assert_eq!(loose.dimensions.uniqueness.score, 80);

    let strict = QualityAnalyzer::new(
        QualityConfig::new().with_identifier_matching(IdentifierMatching::Token),
    )
    .analyze(content, "t.csv")
    .unwrap();
    assert_eq!(strict.dimensions.uniqueness.score, 100);
}

#[test]
fn test_outlier_configuration_changes_accuracy_only() {
    let mut content = String::from("reading\n");
    for _ in 0..9 {
        content.push_str("10\n");
    }
    content.push_str("1000\n");

    let default = analyze_data_quality(&content, "r.csv").unwrap();
    let disabled = QualityAnalyzer::new(
        QualityConfig::new().with_outliers(OutlierConfig::new().with_enabled(false)),
    )
    .analyze(&content, "r.csv")
    .unwrap();
    let high = QualityAnalyzer::new(QualityConfig::new().with_outliers(
        OutlierConfig::new().with_sensitivity(AnomalySensitivity::High),
    ))
    .analyze(&content, "r.csv")
    .unwrap();

    assert_eq!(default.score_of(DimensionKind::Accuracy), 80);
    assert_eq!(disabled.score_of(DimensionKind::Accuracy), 95);
    assert!(high.dimensions.accuracy.issues[1].ends_with("(z-score & IQR outlier)"));

    for kind in [
        DimensionKind::Completeness,
        DimensionKind::Consistency,
        DimensionKind::Validity,
        DimensionKind::Uniqueness,
    ] {
        assert_eq!(default.score_of(kind), disabled.score_of(kind));
    }
}

#[test]
fn test_threshold_report_for_poor_file() {
    let config = QualityConfig::new().with_thresholds(
        DimensionThresholds::default().with_min(DimensionKind::Uniqueness, 90),
    );
    let analyzer = QualityAnalyzer::new(config);
    let result = analyzer
        .analyze("id,v\n1,a\n1,a\n1,a\n", "poor.csv")
        .unwrap();

    let violations = analyzer.threshold_violations(&result);
    let uniqueness = violations
        .iter()
        .find(|v| v.metric == "uniqueness")
        .expect("uniqueness violation");
    assert_eq!(uniqueness.severity, ViolationSeverity::Critical);
    assert!(uniqueness.actual < 90);
}

#[test]
fn test_result_json_shape() {
    let result = analyze_data_quality("a\n1\n", "shape.csv").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "overallScore",
        "totalRecords",
        "totalColumns",
        "fileName",
        "dimensions",
        "summary",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    for kind in DimensionKind::ALL {
        let dimension = &json["dimensions"][kind.key()];
        assert_eq!(dimension["name"], kind.name());
        assert!(dimension["status"].is_string());
        assert!(dimension["issues"].is_array());
        assert!(dimension["recommendations"].is_array());
    }
}
