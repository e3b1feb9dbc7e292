//! Common domain type definitions
//!
//! This module contains the enum types and small value types used across
//! domain models to ensure consistency and facilitate code reuse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of patient-reported survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurveyType {
    /// COPD Assessment Test, 8 items scored 0-5 each
    #[serde(rename = "CAT")]
    Cat,
    /// Modified Medical Research Council dyspnea scale, single grade 0-4
    #[serde(rename = "mMRC")]
    Mmrc,
}

impl SurveyType {
    /// Wire name used by the survey API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "CAT",
            Self::Mmrc => "mMRC",
        }
    }
}

impl fmt::Display for SurveyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Other gender
    Other,
    /// Unknown or not specified
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            "other" | "3" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Gender {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            3 => Self::Other,
            _ => Self::Unknown,
        }
    }
}

/// Self-reported mood in a daily log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mood {
    /// Good mood
    Good,
    /// Neutral mood
    Neutral,
    /// Bad mood
    Bad,
}

impl Mood {
    /// Numeric score for trend charts (higher is better)
    #[must_use]
    pub const fn score(self) -> i32 {
        match self {
            Self::Good => 3,
            Self::Neutral => 2,
            Self::Bad => 1,
        }
    }

    /// Get a descriptive name for this mood
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Bad => "Bad",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Smoking status of a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmokingStatus {
    /// Never smoked
    Never,
    /// Former smoker
    Former,
    /// Current smoker
    Current,
}

/// Severity band for a CAT total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityBand {
    /// CAT 0-10: low symptom impact
    Low,
    /// CAT 11-20: medium symptom impact
    Medium,
    /// CAT 21-30: high symptom impact
    High,
    /// CAT 31-40: very high symptom impact
    VeryHigh,
}

impl SeverityBand {
    /// Get a descriptive name for this severity band
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low impact",
            Self::Medium => "Medium impact",
            Self::High => "High impact",
            Self::VeryHigh => "Very high impact",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// GOLD 2011 ABE classification group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GoldGroup {
    /// Low risk: CAT<10 and mMRC<2
    A,
    /// Medium risk: exactly one of CAT>=10 or mMRC>=2
    B,
    /// High risk: CAT>=10 and mMRC>=2
    E,
}

impl GoldGroup {
    /// Get the display label for this group
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Group A",
            Self::B => "Group B",
            Self::E => "Group E",
        }
    }

    /// Badge color token for dashboard displays
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::A => "green",
            Self::B => "amber",
            Self::E => "orange",
        }
    }

    /// Emoji indicator for dashboard displays
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::A => "\u{2705}",
            Self::B => "\u{26a0}\u{fe0f}",
            Self::E => "\u{1f536}",
        }
    }

    /// Get all GOLD groups
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::A, Self::B, Self::E]
    }
}

impl fmt::Display for GoldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Legacy patient risk level kept for backward-compatible displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
    /// Crisis-level history, reachable only through the exacerbation fallback
    Critical,
}

impl RiskLevel {
    /// Get the display label for this risk level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Medium => "Medium risk",
            Self::High => "High risk",
            Self::Critical => "Critical",
        }
    }

    /// Badge color token for dashboard displays
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "amber",
            Self::High => "orange",
            Self::Critical => "red",
        }
    }

    /// Emoji indicator for dashboard displays
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "\u{2705}",
            Self::Medium => "\u{26a0}\u{fe0f}",
            Self::High => "\u{1f536}",
            Self::Critical => "\u{1f6a8}",
        }
    }

    /// Get all risk levels
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Low, Self::Medium, Self::High, Self::Critical]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive calendar-date window for KPI aggregation
///
/// The caller supplies the window; nothing in this crate reads the clock.
/// `end` doubles as the reference "today" for recency calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First date of the window
    pub start: NaiveDate,
    /// Last date of the window
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window spanning `start` through `end` inclusive
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window of `days` days ending at `end`
    #[must_use]
    pub fn ending_at(end: NaiveDate, days: u32) -> Self {
        Self {
            start: end - chrono::Duration::days(i64::from(days) - 1),
            end,
        }
    }

    /// Number of days covered, counting both endpoints
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether a date falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
