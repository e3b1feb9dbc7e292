//! Tests for domain models: catalogs, daily-log collection, patient
//! profile, wire formats and fixtures

use chrono::NaiveDate;
use respira_core::utils::test_utils::{fixture_rng, synthetic_answers, synthetic_daily_logs};
use respira_core::{
    CAT_QUESTIONS, DailyLog, DailyLogCollection, DateWindow, Gender, GoldGroup, MMRC_QUESTIONS,
    Mood, PatientProfile, RiskLevel, SeverityBand, SurveyType, calculate_cat_score,
    survey_questions, validate_survey_responses,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
}

#[test]
fn test_catalog_option_values_are_contiguous() {
    for question in CAT_QUESTIONS.iter().chain(MMRC_QUESTIONS) {
        for (index, option) in question.options.iter().enumerate() {
            assert_eq!(option.value, i32::try_from(index).unwrap());
        }
    }
}

#[test]
fn test_survey_questions_lookup() {
    assert_eq!(survey_questions(SurveyType::Cat).len(), 8);
    assert_eq!(survey_questions(SurveyType::Mmrc).len(), 1);
    assert_eq!(survey_questions(SurveyType::Mmrc)[0].id, "dyspnea_grade");
}

#[test]
fn test_daily_log_collection_upsert_replaces_same_date() {
    let mut collection = DailyLogCollection::new();

    let created = collection.upsert(
        DailyLog::new("log-1".to_string(), "p".to_string(), date(5)).with_water_intake(1000),
    );
    assert!(created);

    let created = collection.upsert(
        DailyLog::new("log-2".to_string(), "p".to_string(), date(5)).with_water_intake(1800),
    );
    assert!(!created);

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(date(5)).unwrap().water_intake_ml, Some(1800));
    assert_eq!(collection.get(date(5)).unwrap().log_id, "log-2");
}

#[test]
fn test_daily_log_collection_iterates_in_date_order() {
    let collection = DailyLogCollection::from_logs([
        DailyLog::new("c".to_string(), "p".to_string(), date(20)),
        DailyLog::new("a".to_string(), "p".to_string(), date(3)),
        DailyLog::new("b".to_string(), "p".to_string(), date(11)),
    ]);

    let dates: Vec<NaiveDate> = collection.iter().map(|log| log.log_date).collect();
    assert_eq!(dates, vec![date(3), date(11), date(20)]);

    let window = DateWindow::new(date(4), date(15));
    let windowed = collection.in_window(&window);
    assert_eq!(windowed.len(), 1);
    assert_eq!(windowed[0].log_date, date(11));
}

#[test]
fn test_patient_age_and_bmi() {
    let mut profile = PatientProfile::new(
        "p".to_string(),
        "Test Patient".to_string(),
        NaiveDate::from_ymd_opt(1950, 7, 15).unwrap(),
    );

    assert_eq!(profile.age_on(date(14)), 74);
    assert_eq!(profile.age_on(date(15)), 75);

    assert_eq!(profile.bmi(), None);
    profile.height_cm = Some(172.0);
    assert_eq!(profile.bmi(), None);
    profile.weight_kg = Some(70.0);
    // 70 / 1.72^2 = 23.66, rounded to one decimal
    assert_eq!(profile.bmi(), Some(23.7));
}

#[test]
fn test_date_window() {
    let window = DateWindow::new(date(1), date(30));
    assert_eq!(window.days(), 30);
    assert!(window.contains(date(1)));
    assert!(window.contains(date(30)));
    assert!(!window.contains(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));

    let window = DateWindow::ending_at(date(30), 30);
    assert_eq!(window.start, date(1));

    let window = respira_core::KpiConfig::default().window_ending_at(date(30));
    assert_eq!(window.start, date(1));
    assert_eq!(window.days(), 30);
}

#[test]
fn test_mood_scores_order_by_wellbeing() {
    assert!(Mood::Good.score() > Mood::Neutral.score());
    assert!(Mood::Neutral.score() > Mood::Bad.score());
}

#[test]
fn test_enum_wire_formats() {
    assert_eq!(serde_json::to_string(&Mood::Good).unwrap(), "\"GOOD\"");
    assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"MALE\"");
    assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"low\"");
    assert_eq!(serde_json::to_string(&GoldGroup::E).unwrap(), "\"E\"");
    assert_eq!(serde_json::to_string(&SurveyType::Cat).unwrap(), "\"CAT\"");
    assert_eq!(serde_json::to_string(&SurveyType::Mmrc).unwrap(), "\"mMRC\"");
    assert_eq!(
        serde_json::to_string(&SeverityBand::VeryHigh).unwrap(),
        "\"very-high\""
    );

    let mood: Mood = serde_json::from_str("\"BAD\"").unwrap();
    assert_eq!(mood, Mood::Bad);
    let level: RiskLevel = serde_json::from_str("\"critical\"").unwrap();
    assert_eq!(level, RiskLevel::Critical);
}

#[test]
fn test_daily_log_roundtrips_through_json() {
    let log = DailyLog::new("log-1".to_string(), "patient-1".to_string(), date(12))
        .with_medication(true)
        .with_mood(Mood::Neutral)
        .with_smoking(0);

    let json = serde_json::to_string(&log).unwrap();
    assert!(json.contains("\"log_date\":\"2025-07-12\""));
    assert!(json.contains("\"mood\":\"NEUTRAL\""));

    let parsed: DailyLog = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, log);
}

#[test]
fn test_gender_conversions() {
    assert_eq!(Gender::from("male"), Gender::Male);
    assert_eq!(Gender::from("F"), Gender::Female);
    assert_eq!(Gender::from(2), Gender::Female);
    assert_eq!(Gender::from("?"), Gender::Unknown);
}

#[test]
fn test_fixtures_are_deterministic_and_valid() {
    let window = DateWindow::new(date(1), date(14));

    let first = synthetic_daily_logs("patient-1", &window, &mut fixture_rng(42));
    let second = synthetic_daily_logs("patient-1", &window, &mut fixture_rng(42));
    assert_eq!(first, second);
    assert_eq!(first.len(), 14);

    // Generated answer sets always pass validation and scoring
    let answers = synthetic_answers(SurveyType::Cat, &mut fixture_rng(7));
    assert!(validate_survey_responses(SurveyType::Cat, &answers).is_valid);
    let score = calculate_cat_score(&answers).unwrap();
    assert!((0..=40).contains(&score));
}
