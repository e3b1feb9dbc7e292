//! Tests for CAT and mMRC score calculation

use respira_core::{
    CAT_QUESTIONS, ScoringError, SurveyAnswers, calculate_cat_score, calculate_mmrc_grade,
};

fn cat_answers(values: [i32; 8]) -> SurveyAnswers {
    CAT_QUESTIONS
        .iter()
        .zip(values)
        .map(|(question, value)| (question.id.to_string(), value))
        .collect()
}

fn mmrc_answers(grade: i32) -> SurveyAnswers {
    SurveyAnswers::from([("dyspnea_grade".to_string(), grade)])
}

#[test]
fn test_cat_score_is_arithmetic_sum() {
    assert_eq!(calculate_cat_score(&cat_answers([0; 8])).unwrap(), 0);
    assert_eq!(calculate_cat_score(&cat_answers([5; 8])).unwrap(), 40);
    assert_eq!(
        calculate_cat_score(&cat_answers([1, 2, 3, 4, 5, 0, 1, 2])).unwrap(),
        18
    );
}

#[test]
fn test_cat_score_stays_in_range_for_valid_input() {
    for value in 0..=5 {
        let score = calculate_cat_score(&cat_answers([value; 8])).unwrap();
        assert!((0..=40).contains(&score));
        assert_eq!(score, value * 8);
    }
}

#[test]
fn test_cat_score_rejects_missing_answer() {
    let mut answers = cat_answers([2; 8]);
    answers.remove("sleep");

    match calculate_cat_score(&answers) {
        Err(ScoringError::MissingAnswer(question)) => assert_eq!(question, "sleep"),
        other => panic!("expected MissingAnswer, got {other:?}"),
    }
}

#[test]
fn test_cat_score_rejects_out_of_range_answer() {
    let mut answers = cat_answers([2; 8]);
    answers.insert("cough".to_string(), 99);

    match calculate_cat_score(&answers) {
        Err(ScoringError::InvalidAnswerValue { question, value, max }) => {
            assert_eq!(question, "cough");
            assert_eq!(value, 99);
            assert_eq!(max, 5);
        }
        other => panic!("expected InvalidAnswerValue, got {other:?}"),
    }
}

#[test]
fn test_mmrc_grade_is_answer_verbatim() {
    for grade in 0..=4 {
        assert_eq!(calculate_mmrc_grade(&mmrc_answers(grade)).unwrap(), grade);
    }
}

#[test]
fn test_mmrc_grade_rejects_bad_input() {
    assert!(calculate_mmrc_grade(&SurveyAnswers::new()).is_err());
    assert!(calculate_mmrc_grade(&mmrc_answers(5)).is_err());
    assert!(calculate_mmrc_grade(&mmrc_answers(-1)).is_err());
}

#[test]
fn test_scoring_is_idempotent() {
    let answers = cat_answers([3, 1, 4, 1, 5, 0, 2, 5]);
    let first = calculate_cat_score(&answers).unwrap();
    let second = calculate_cat_score(&answers).unwrap();
    assert_eq!(first, second);

    let answers = mmrc_answers(2);
    assert_eq!(
        calculate_mmrc_grade(&answers).unwrap(),
        calculate_mmrc_grade(&answers).unwrap()
    );
}
