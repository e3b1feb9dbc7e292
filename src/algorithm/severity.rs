//! CAT severity banding and descriptive labels

use crate::models::types::SeverityBand;

/// Classify a CAT total score into its severity band
///
/// Thresholds are inclusive upper bounds: 10, 20 and 30 belong to the
/// lower band.
#[must_use]
pub const fn cat_severity(score: i32) -> SeverityBand {
    if score <= 10 {
        SeverityBand::Low
    } else if score <= 20 {
        SeverityBand::Medium
    } else if score <= 30 {
        SeverityBand::High
    } else {
        SeverityBand::VeryHigh
    }
}

/// Display label combining the severity band with the raw score
#[must_use]
pub fn cat_score_label(score: i32) -> String {
    format!("{} ({score}/40)", cat_severity(score).description())
}

/// Display label for an mMRC dyspnea grade
///
/// Grades outside 0-4 degrade to a generic label; the output is cosmetic.
#[must_use]
pub fn mmrc_grade_label(grade: i32) -> String {
    match grade {
        0 => "Grade 0 - Breathless only with strenuous exercise".to_string(),
        1 => "Grade 1 - Short of breath when hurrying or walking up a slight hill".to_string(),
        2 => "Grade 2 - Walks slower than others the same age, or must stop for breath".to_string(),
        3 => "Grade 3 - Must stop for breath after about 100 meters or a few minutes".to_string(),
        4 => "Grade 4 - Too breathless to leave the house, or breathless when dressing".to_string(),
        _ => format!("Grade {grade}"),
    }
}
