//! Survey-response validation
//!
//! Checks questionnaire completeness and answer ranges before any score is
//! computed. Problems are reported as data so the caller decides whether
//! to block submission or re-prompt the patient.

use crate::models::survey::{SurveyAnswers, survey_questions};
use crate::models::types::SurveyType;

/// A recorded answer outside its question's option range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeViolation {
    /// Question the answer belongs to
    pub question: &'static str,
    /// The offending value
    pub value: i32,
    /// Highest allowed value for the question
    pub max: i32,
}

/// Outcome of validating a survey submission
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether the submission can be scored
    pub is_valid: bool,
    /// Required questions with no recorded answer
    pub missing_questions: Vec<&'static str>,
    /// Answers outside their question's option range
    pub out_of_range: Vec<RangeViolation>,
}

/// Validate a survey submission against its static question catalog
///
/// Checks presence for every required question and the option range of
/// every recorded answer; either kind of problem invalidates the
/// submission.
#[must_use]
pub fn validate_survey_responses(
    survey_type: SurveyType,
    answers: &SurveyAnswers,
) -> ValidationReport {
    let mut missing_questions = Vec::new();
    let mut out_of_range = Vec::new();

    for question in survey_questions(survey_type) {
        match answers.get(question.id) {
            None if question.required => missing_questions.push(question.id),
            None => {}
            Some(&value) if !question.accepts(value) => out_of_range.push(RangeViolation {
                question: question.id,
                value,
                max: question.max_value(),
            }),
            Some(_) => {}
        }
    }

    if !out_of_range.is_empty() {
        log::warn!(
            "{survey_type} submission carries {} out-of-range answers",
            out_of_range.len()
        );
    }

    ValidationReport {
        is_valid: missing_questions.is_empty() && out_of_range.is_empty(),
        missing_questions,
        out_of_range,
    }
}
