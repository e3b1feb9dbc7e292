//! A Rust library implementing the clinical computation core of a COPD
//! care-management system: CAT/mMRC questionnaire scoring, GOLD ABE risk
//! classification, and KPI aggregation over daily health logs.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod validation;

// Re-export the most common types for easier use
// Core types
pub use config::{KpiConfig, MoodAlertConfig};
pub use error::{Result, ScoringError};
pub use models::daily_log::{DailyLog, DailyLogCollection};
pub use models::kpi::{
    MoodDistribution, PatientKpi, PatientRecord, ScoreTrend, SmokingSummary, SurveyStats,
};
pub use models::patient::{PatientProfile, RiskAssessment, RiskInput};
pub use models::survey::{
    CAT_QUESTIONS, MMRC_QUESTIONS, SurveyAnswers, SurveyOption, SurveyQuestion, SurveyResponse,
    survey_questions,
};
pub use models::types::{
    DateWindow, Gender, GoldGroup, Mood, RiskLevel, SeverityBand, SmokingStatus, SurveyType,
};

// Scoring and classification
pub use algorithm::risk::{
    assess, classify_gold_group, gold_group_to_risk_level, gold_group_to_risk_score, risk_level,
};
pub use algorithm::score::{CAT_MAX_SCORE, MMRC_MAX_GRADE, calculate_cat_score, calculate_mmrc_grade};
pub use algorithm::severity::{cat_score_label, cat_severity, mmrc_grade_label};

// KPI aggregation
pub use algorithm::kpi::{
    average_exercise_minutes, average_water_intake, days_since_last_log, has_concerning_mood_pattern,
    log_submission_rate, medication_adherence_rate, mood_distribution, patient_kpi, roster_kpis,
    smoking_summary, survey_completion_rate, survey_stats,
};

// Validation
pub use validation::{RangeViolation, ValidationReport, validate_survey_responses};
