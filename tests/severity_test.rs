//! Tests for CAT severity banding and display labels

use respira_core::{SeverityBand, cat_score_label, cat_severity, mmrc_grade_label};

#[test]
fn test_severity_boundaries_are_exact() {
    assert_eq!(cat_severity(0), SeverityBand::Low);
    assert_eq!(cat_severity(10), SeverityBand::Low);
    assert_eq!(cat_severity(11), SeverityBand::Medium);
    assert_eq!(cat_severity(20), SeverityBand::Medium);
    assert_eq!(cat_severity(21), SeverityBand::High);
    assert_eq!(cat_severity(30), SeverityBand::High);
    assert_eq!(cat_severity(31), SeverityBand::VeryHigh);
    assert_eq!(cat_severity(40), SeverityBand::VeryHigh);
}

#[test]
fn test_severity_bands_are_ordered() {
    assert!(SeverityBand::Low < SeverityBand::Medium);
    assert!(SeverityBand::Medium < SeverityBand::High);
    assert!(SeverityBand::High < SeverityBand::VeryHigh);
}

#[test]
fn test_cat_score_label_combines_band_and_score() {
    assert_eq!(cat_score_label(7), "Low impact (7/40)");
    assert_eq!(cat_score_label(15), "Medium impact (15/40)");
    assert_eq!(cat_score_label(25), "High impact (25/40)");
    assert_eq!(cat_score_label(38), "Very high impact (38/40)");
}

#[test]
fn test_mmrc_grade_labels() {
    for grade in 0..=4 {
        let label = mmrc_grade_label(grade);
        assert!(label.starts_with(&format!("Grade {grade} - ")));
    }
}

#[test]
fn test_mmrc_grade_label_degrades_gracefully() {
    assert_eq!(mmrc_grade_label(7), "Grade 7");
    assert_eq!(mmrc_grade_label(-1), "Grade -1");
}
