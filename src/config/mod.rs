//! Configuration for KPI aggregation and clinical alert thresholds.

use crate::models::types::DateWindow;
use chrono::NaiveDate;

/// Thresholds for the concerning-mood alert
#[derive(Debug, Clone, Copy)]
pub struct MoodAlertConfig {
    /// Number of bad-mood days that triggers the alert on its own
    pub min_bad_days: usize,
    /// Fraction of recorded days with bad mood above which the alert fires
    pub max_bad_ratio: f64,
}

impl Default for MoodAlertConfig {
    fn default() -> Self {
        Self {
            min_bad_days: 3,
            max_bad_ratio: 0.3,
        }
    }
}

/// Configuration for KPI aggregation
#[derive(Debug, Clone)]
pub struct KpiConfig {
    /// Length of the aggregation window in days
    pub window_days: u32,
    /// Survey submissions expected per window (one CAT plus one mMRC)
    pub expected_surveys_per_window: u32,
    /// Daily water intake goal in milliliters
    pub water_goal_ml: i32,
    /// Daily exercise goal in minutes
    pub exercise_goal_minutes: i32,
    /// Mood alert thresholds
    pub mood_alert: MoodAlertConfig,
}

impl KpiConfig {
    /// Aggregation window of `window_days` days ending at `end`
    #[must_use]
    pub fn window_ending_at(&self, end: NaiveDate) -> DateWindow {
        DateWindow::ending_at(end, self.window_days)
    }
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            expected_surveys_per_window: 2,
            water_goal_ml: 2000,
            exercise_goal_minutes: 30,
            mood_alert: MoodAlertConfig::default(),
        }
    }
}
