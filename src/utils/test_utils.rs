//! Synthetic fixture data for tests and demos
//!
//! Generates plausible daily-log and survey histories from a seeded RNG so
//! downstream test suites stay deterministic.

use crate::models::daily_log::DailyLog;
use crate::models::survey::{SurveyAnswers, SurveyResponse, survey_questions};
use crate::models::types::{DateWindow, Mood, SurveyType};
use chrono::{DateTime, Utc};
use rand::prelude::*;

/// Deterministic RNG for fixture generation
#[must_use]
pub fn fixture_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One synthetic daily log per date in the window
#[must_use]
pub fn synthetic_daily_logs(patient_id: &str, window: &DateWindow, rng: &mut StdRng) -> Vec<DailyLog> {
    let mut logs = Vec::new();
    let mut date = window.start;

    while date <= window.end {
        let mut log = DailyLog::new(
            format!("log-{patient_id}-{date}"),
            patient_id.to_string(),
            date,
        );
        log.medication_taken = Some(rng.random_bool(0.8));
        log.water_intake_ml = Some(rng.random_range(800..2600));
        log.exercise_minutes = Some(rng.random_range(0..60));
        log.smoking_count = if rng.random_bool(0.2) {
            Some(rng.random_range(1..10))
        } else {
            Some(0)
        };
        log.mood = Some(match rng.random_range(0..3) {
            0 => Mood::Good,
            1 => Mood::Neutral,
            _ => Mood::Bad,
        });
        logs.push(log);

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    logs
}

/// A complete random answer set for a survey type
#[must_use]
pub fn synthetic_answers(survey_type: SurveyType, rng: &mut StdRng) -> SurveyAnswers {
    survey_questions(survey_type)
        .iter()
        .map(|question| (question.id.to_string(), rng.random_range(0..=question.max_value())))
        .collect()
}

/// Build a survey response record for tests
#[must_use]
pub fn survey_response(
    patient_id: &str,
    survey_type: SurveyType,
    score: i32,
    completed_at: DateTime<Utc>,
) -> SurveyResponse {
    SurveyResponse {
        response_id: format!("resp-{patient_id}-{}", completed_at.timestamp()),
        patient_id: patient_id.to_string(),
        survey_type,
        score,
        responses: SurveyAnswers::new(),
        completed_at,
    }
}
