//! Daily health log models
//!
//! One log per patient per calendar date, recorded by the patient-facing
//! app. Every observation is independently optional: absence means "not
//! recorded", which aggregation treats differently from an observed zero.

use crate::models::types::{DateWindow, Mood};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single day's self-reported health observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Unique id of this log record
    pub log_id: String,
    /// Patient the log belongs to
    pub patient_id: String,
    /// Calendar date the log covers
    pub log_date: NaiveDate,
    /// Whether prescribed medication was taken
    pub medication_taken: Option<bool>,
    /// Water intake in milliliters
    pub water_intake_ml: Option<i32>,
    /// Exercise duration in minutes
    pub exercise_minutes: Option<i32>,
    /// Number of cigarettes smoked
    pub smoking_count: Option<i32>,
    /// Free-text symptom description
    pub symptoms: Option<String>,
    /// Self-reported mood
    pub mood: Option<Mood>,
    /// Blood oxygen saturation in percent
    pub spo2: Option<i32>,
    /// Heart rate in beats per minute
    pub heart_rate: Option<i32>,
    /// Systolic blood pressure in mmHg
    pub systolic_bp: Option<i32>,
    /// Diastolic blood pressure in mmHg
    pub diastolic_bp: Option<i32>,
}

impl DailyLog {
    /// Create an empty log for a patient and date
    #[must_use]
    pub const fn new(log_id: String, patient_id: String, log_date: NaiveDate) -> Self {
        Self {
            log_id,
            patient_id,
            log_date,
            medication_taken: None,
            water_intake_ml: None,
            exercise_minutes: None,
            smoking_count: None,
            symptoms: None,
            mood: None,
            spo2: None,
            heart_rate: None,
            systolic_bp: None,
            diastolic_bp: None,
        }
    }

    /// Set the medication observation
    #[must_use]
    pub const fn with_medication(mut self, taken: bool) -> Self {
        self.medication_taken = Some(taken);
        self
    }

    /// Set the water intake observation
    #[must_use]
    pub const fn with_water_intake(mut self, milliliters: i32) -> Self {
        self.water_intake_ml = Some(milliliters);
        self
    }

    /// Set the exercise observation
    #[must_use]
    pub const fn with_exercise(mut self, minutes: i32) -> Self {
        self.exercise_minutes = Some(minutes);
        self
    }

    /// Set the smoking observation
    #[must_use]
    pub const fn with_smoking(mut self, cigarettes: i32) -> Self {
        self.smoking_count = Some(cigarettes);
        self
    }

    /// Set the mood observation
    #[must_use]
    pub const fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }
}

/// Date-keyed collection of one patient's daily logs
///
/// Enforces the one-log-per-date rule with upsert semantics: writing to an
/// already-logged date replaces the stored record. Iteration is always in
/// ascending date order.
#[derive(Debug, Clone, Default)]
pub struct DailyLogCollection {
    logs: BTreeMap<NaiveDate, DailyLog>,
}

impl DailyLogCollection {
    /// Create an empty collection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logs: BTreeMap::new(),
        }
    }

    /// Build a collection from a sequence of logs; later duplicates of a
    /// date replace earlier ones
    #[must_use]
    pub fn from_logs(logs: impl IntoIterator<Item = DailyLog>) -> Self {
        let mut collection = Self::new();
        for log in logs {
            collection.upsert(log);
        }
        collection
    }

    /// Insert or replace the log for its date
    ///
    /// Returns true when a new date was created, false when an existing
    /// record was replaced.
    pub fn upsert(&mut self, log: DailyLog) -> bool {
        self.logs.insert(log.log_date, log).is_none()
    }

    /// Log recorded for a specific date
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.logs.get(&date)
    }

    /// Number of logged dates
    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether the collection holds no logs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Logs in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = &DailyLog> {
        self.logs.values()
    }

    /// Owned logs in ascending date order
    #[must_use]
    pub fn to_vec(&self) -> Vec<DailyLog> {
        self.logs.values().cloned().collect()
    }

    /// Owned logs falling inside a window, in ascending date order
    #[must_use]
    pub fn in_window(&self, window: &DateWindow) -> Vec<DailyLog> {
        self.logs
            .range(window.start..=window.end)
            .map(|(_, log)| log.clone())
            .collect()
    }
}
