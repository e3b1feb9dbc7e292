//! Patient profile and risk-assessment models

use crate::models::types::{Gender, GoldGroup, RiskLevel, SmokingStatus};
use crate::utils::round1;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Demographic and clinical profile of a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Unique patient id
    pub user_id: String,
    /// Full name
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Gender, when recorded
    pub gender: Option<Gender>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Smoking status, when recorded
    pub smoking_status: Option<SmokingStatus>,
    /// Exacerbation episodes in the last 12 months
    pub exacerbation_count_last_12m: Option<i32>,
    /// Hospitalizations in the last 12 months
    pub hospitalization_count_last_12m: Option<i32>,
    /// Date of the most recent exacerbation
    pub last_exacerbation_date: Option<NaiveDate>,
    /// Latest GOLD ABE group, when an assessment exists
    pub gold_group: Option<GoldGroup>,
}

impl PatientProfile {
    /// Create a profile with only the required fields set
    #[must_use]
    pub const fn new(user_id: String, name: String, birth_date: NaiveDate) -> Self {
        Self {
            user_id,
            name,
            birth_date,
            gender: None,
            height_cm: None,
            weight_kg: None,
            phone: None,
            smoking_status: None,
            exacerbation_count_last_12m: None,
            hospitalization_count_last_12m: None,
            last_exacerbation_date: None,
            gold_group: None,
        }
    }

    /// Age in whole years on the given date
    #[must_use]
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        let mut age = date.year() - self.birth_date.year();
        if (date.month(), date.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }

    /// Body mass index from recorded height and weight, rounded to one
    /// decimal; None unless both measurements exist
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let height_m = self.height_cm? / 100.0;
        let weight = self.weight_kg?;
        if height_m <= 0.0 {
            return None;
        }
        Some(round1(weight / (height_m * height_m)))
    }
}

/// Inputs to risk-level resolution
///
/// GOLD assessment data may not exist yet for a newly-onboarded patient;
/// the exacerbation counts feed the fallback heuristic in that case.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RiskInput {
    /// GOLD ABE group, when an assessment exists
    pub gold_group: Option<GoldGroup>,
    /// Exacerbation episodes in the last 12 months
    pub exacerbation_count_last_12m: Option<i32>,
    /// Hospitalizations in the last 12 months
    pub hospitalization_count_last_12m: Option<i32>,
}

impl From<&PatientProfile> for RiskInput {
    fn from(profile: &PatientProfile) -> Self {
        Self {
            gold_group: profile.gold_group,
            exacerbation_count_last_12m: profile.exacerbation_count_last_12m,
            hospitalization_count_last_12m: profile.hospitalization_count_last_12m,
        }
    }
}

/// Snapshot result of a GOLD ABE risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Patient the assessment belongs to
    pub patient_id: String,
    /// CAT total score used for classification
    pub cat_score: i32,
    /// mMRC grade used for classification
    pub mmrc_grade: i32,
    /// Exacerbation count snapshot at assessment time
    pub exacerbation_count_12m: i32,
    /// Hospitalization count snapshot at assessment time
    pub hospitalization_count_12m: i32,
    /// Resulting GOLD ABE group
    pub gold_group: GoldGroup,
    /// Legacy risk score (25, 50 or 75)
    pub risk_score: i32,
    /// Legacy risk level mapped from the GOLD group
    pub risk_level: RiskLevel,
    /// When the assessment was performed
    pub assessed_at: DateTime<Utc>,
}
