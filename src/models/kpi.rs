//! Derived KPI view models
//!
//! KPI structures are recomputed on demand from daily logs and survey
//! history; they are views, never persisted as source of truth.

use crate::models::daily_log::DailyLog;
use crate::models::patient::PatientProfile;
use crate::models::survey::SurveyResponse;
use crate::models::types::{DateWindow, GoldGroup, RiskLevel};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Mood counts over a log window
///
/// Every log falls into exactly one bucket; `unrecorded` counts logs with
/// no mood entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodDistribution {
    /// Days with good mood
    pub good: usize,
    /// Days with neutral mood
    pub neutral: usize,
    /// Days with bad mood
    pub bad: usize,
    /// Days with a log but no mood recorded
    pub unrecorded: usize,
}

impl MoodDistribution {
    /// Number of logs with any mood recorded
    #[must_use]
    pub const fn total_recorded(&self) -> usize {
        self.good + self.neutral + self.bad
    }

    /// Fraction of recorded moods that were bad; 0.0 with no data
    #[must_use]
    pub fn bad_ratio(&self) -> f64 {
        let total = self.total_recorded();
        if total == 0 {
            0.0
        } else {
            self.bad as f64 / total as f64
        }
    }
}

/// Smoking behavior summary over a log window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokingSummary {
    /// Days with at least one cigarette
    pub smoking_days: usize,
    /// Days with a log but no smoking
    pub smoking_free_days: usize,
    /// Total cigarettes across the window
    pub total_cigarettes: i32,
    /// Cigarettes per smoking day, rounded; 0 with no smoking days
    pub avg_per_smoking_day: i32,
}

/// Direction of a patient's recent survey scores
///
/// Both CAT and mMRC ascend with symptom impact, so a falling score reads
/// as improving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTrend {
    /// Latest score meaningfully below the prior average
    Improving,
    /// Latest score within tolerance of the prior average
    Stable,
    /// Latest score meaningfully above the prior average
    Declining,
}

/// Descriptive statistics over one survey type's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyStats {
    /// Number of submissions
    pub total_count: usize,
    /// Mean score across all submissions
    pub avg_score: f64,
    /// Lowest recorded score
    pub min_score: i32,
    /// Highest recorded score
    pub max_score: i32,
    /// Most recent score
    pub latest_score: i32,
    /// When the most recent submission was completed
    pub latest_date: DateTime<Utc>,
    /// Trend flag; None until at least two submissions exist
    pub trend: Option<ScoreTrend>,
}

/// Aggregated dashboard metrics for one patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientKpi {
    /// Patient the metrics belong to
    pub patient_id: String,
    /// Window the metrics were aggregated over
    pub window: DateWindow,
    /// Percentage of recorded days on which medication was taken
    pub medication_adherence_rate: f64,
    /// Percentage of window days with a submitted log
    pub log_submission_rate: f64,
    /// Percentage of expected surveys completed inside the window
    pub survey_completion_rate: f64,
    /// BMI from the patient profile
    pub latest_bmi: Option<f64>,
    /// Blood oxygen saturation from the most recent log
    pub latest_spo2: Option<i32>,
    /// Heart rate from the most recent log
    pub latest_heart_rate: Option<i32>,
    /// Systolic blood pressure from the most recent log
    pub latest_systolic_bp: Option<i32>,
    /// Diastolic blood pressure from the most recent log
    pub latest_diastolic_bp: Option<i32>,
    /// Most recent CAT total score
    pub latest_cat_score: Option<i32>,
    /// Most recent mMRC grade
    pub latest_mmrc_grade: Option<i32>,
    /// GOLD group from the latest scores, or the profile's stored group
    pub gold_group: Option<GoldGroup>,
    /// Legacy risk score; only the GOLD path produces one
    pub risk_score: Option<i32>,
    /// Resolved risk level (GOLD first, exacerbation fallback otherwise)
    pub risk_level: Option<RiskLevel>,
    /// Date of the most recent log
    pub last_log_date: Option<NaiveDate>,
    /// Days between the last log and the window end
    pub days_since_last_log: Option<i64>,
    /// Mean exercise minutes over days with a positive entry
    pub avg_exercise_minutes: Option<f64>,
    /// Mean water intake over days with a positive entry
    pub avg_water_intake_ml: Option<f64>,
    /// Mood bucket counts over the window
    pub mood: MoodDistribution,
    /// Smoking summary over the window
    pub smoking: SmokingSummary,
    /// Whether the mood history crossed the clinical alert thresholds
    pub concerning_mood_pattern: bool,
}

/// One patient's full input to roster KPI aggregation
#[derive(Debug, Clone)]
pub struct PatientRecord {
    /// The patient's profile
    pub profile: PatientProfile,
    /// Daily-log history
    pub logs: Vec<DailyLog>,
    /// Survey history, CAT and mMRC mixed
    pub surveys: Vec<SurveyResponse>,
}
