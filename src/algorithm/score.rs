//! CAT and mMRC score calculation
//!
//! Scores are computed only from complete, in-range answer sets: a missing
//! or out-of-range answer is rejected rather than silently skewing the
//! total.

use crate::error::{Result, ScoringError};
use crate::models::survey::{SurveyAnswers, SurveyQuestion, survey_questions};
use crate::models::types::SurveyType;

/// Maximum attainable CAT total score
pub const CAT_MAX_SCORE: i32 = 40;
/// Maximum mMRC dyspnea grade
pub const MMRC_MAX_GRADE: i32 = 4;

/// Sum the eight CAT sub-scale answers into a total score
///
/// A valid answer set always yields a score in [0, 40].
pub fn calculate_cat_score(answers: &SurveyAnswers) -> Result<i32> {
    let mut total = 0;
    for question in survey_questions(SurveyType::Cat) {
        total += answer_for(question, answers)?;
    }
    Ok(total)
}

/// Read the mMRC dyspnea grade, in [0, 4]
///
/// The grade is the `dyspnea_grade` answer verbatim.
pub fn calculate_mmrc_grade(answers: &SurveyAnswers) -> Result<i32> {
    answer_for(&survey_questions(SurveyType::Mmrc)[0], answers)
}

fn answer_for(question: &SurveyQuestion, answers: &SurveyAnswers) -> Result<i32> {
    let value = *answers
        .get(question.id)
        .ok_or_else(|| ScoringError::MissingAnswer(question.id.to_string()))?;

    if !question.accepts(value) {
        return Err(ScoringError::InvalidAnswerValue {
            question: question.id.to_string(),
            value,
            max: question.max_value(),
        });
    }

    Ok(value)
}
