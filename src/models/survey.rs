//! Survey definitions and response models
//!
//! Static CAT and mMRC questionnaire catalogs together with the
//! patient-submitted response types. Catalogs are immutable; option values
//! for every question are contiguous integers starting at 0.

use crate::models::types::SurveyType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answer set submitted for a survey, keyed by question id
pub type SurveyAnswers = HashMap<String, i32>;

/// A single selectable option for a survey question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyOption {
    /// Numeric value recorded when this option is selected
    pub value: i32,
    /// Short display label
    pub label: &'static str,
    /// Longer description shown to the patient, where the scale needs one
    pub description: Option<&'static str>,
}

/// A statically defined survey question
#[derive(Debug, Clone, Copy)]
pub struct SurveyQuestion {
    /// Question key, e.g. "cough" or "dyspnea_grade"
    pub id: &'static str,
    /// Question text shown to the patient
    pub text: &'static str,
    /// Ordered answer options; values are contiguous from 0
    pub options: &'static [SurveyOption],
    /// Whether an answer is required for a valid submission
    pub required: bool,
}

impl SurveyQuestion {
    /// Highest selectable answer value for this question
    #[must_use]
    pub const fn max_value(&self) -> i32 {
        self.options[self.options.len() - 1].value
    }

    /// Whether `value` falls inside this question's option range
    #[must_use]
    pub const fn accepts(&self, value: i32) -> bool {
        value >= 0 && value <= self.max_value()
    }
}

/// Build the 0-5 option scale used by every CAT item, with descriptions on
/// the two anchor statements
const fn cat_scale(anchor_low: &'static str, anchor_high: &'static str) -> [SurveyOption; 6] {
    [
        SurveyOption { value: 0, label: "0", description: Some(anchor_low) },
        SurveyOption { value: 1, label: "1", description: None },
        SurveyOption { value: 2, label: "2", description: None },
        SurveyOption { value: 3, label: "3", description: None },
        SurveyOption { value: 4, label: "4", description: None },
        SurveyOption { value: 5, label: "5", description: Some(anchor_high) },
    ]
}

const CAT_COUGH_OPTIONS: [SurveyOption; 6] = cat_scale("Never coughs", "Coughs all the time");
const CAT_PHLEGM_OPTIONS: [SurveyOption; 6] = cat_scale("No phlegm at all", "Chest full of phlegm");
const CAT_CHEST_OPTIONS: [SurveyOption; 6] = cat_scale("Chest not tight at all", "Chest very tight");
const CAT_BREATH_OPTIONS: [SurveyOption; 6] =
    cat_scale("Not breathless on a hill or stairs", "Very breathless on a hill or stairs");
const CAT_ACTIVITY_OPTIONS: [SurveyOption; 6] =
    cat_scale("Not limited at home", "Very limited at home");
const CAT_CONFIDENCE_OPTIONS: [SurveyOption; 6] =
    cat_scale("Confident leaving home", "Not confident leaving home");
const CAT_SLEEP_OPTIONS: [SurveyOption; 6] = cat_scale("Sleeps soundly", "Sleeps poorly");
const CAT_ENERGY_OPTIONS: [SurveyOption; 6] = cat_scale("Lots of energy", "No energy at all");

/// The 8 CAT questions, each scored 0-5
pub const CAT_QUESTIONS: &[SurveyQuestion] = &[
    SurveyQuestion {
        id: "cough",
        text: "I never cough / I cough all the time",
        options: &CAT_COUGH_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "phlegm",
        text: "I have no phlegm in my chest at all / My chest is completely full of phlegm",
        options: &CAT_PHLEGM_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "chest_tightness",
        text: "My chest does not feel tight at all / My chest feels very tight",
        options: &CAT_CHEST_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "breathlessness",
        text: "When I walk up a hill or one flight of stairs I am not breathless / \
               When I walk up a hill or one flight of stairs I am very breathless",
        options: &CAT_BREATH_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "activity_limitation",
        text: "I am not limited doing any activities at home / \
               I am very limited doing activities at home",
        options: &CAT_ACTIVITY_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "confidence",
        text: "I am confident leaving my home despite my lung condition / \
               I am not at all confident leaving my home because of my lung condition",
        options: &CAT_CONFIDENCE_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "sleep",
        text: "I sleep soundly / I don't sleep soundly because of my lung condition",
        options: &CAT_SLEEP_OPTIONS,
        required: true,
    },
    SurveyQuestion {
        id: "energy",
        text: "I have lots of energy / I have no energy at all",
        options: &CAT_ENERGY_OPTIONS,
        required: true,
    },
];

const MMRC_OPTIONS: [SurveyOption; 5] = [
    SurveyOption {
        value: 0,
        label: "Grade 0",
        description: Some("Breathless only with strenuous exercise"),
    },
    SurveyOption {
        value: 1,
        label: "Grade 1",
        description: Some("Short of breath when hurrying or walking up a slight hill"),
    },
    SurveyOption {
        value: 2,
        label: "Grade 2",
        description: Some("Walks slower than others the same age, or must stop for breath"),
    },
    SurveyOption {
        value: 3,
        label: "Grade 3",
        description: Some("Must stop for breath after about 100 meters or a few minutes"),
    },
    SurveyOption {
        value: 4,
        label: "Grade 4",
        description: Some("Too breathless to leave the house, or breathless when dressing"),
    },
];

/// The single mMRC question, graded 0-4
pub const MMRC_QUESTIONS: &[SurveyQuestion] = &[SurveyQuestion {
    id: "dyspnea_grade",
    text: "Which statement best describes your breathlessness?",
    options: &MMRC_OPTIONS,
    required: true,
}];

/// Get the static question catalog for a survey type
#[must_use]
pub const fn survey_questions(survey_type: SurveyType) -> &'static [SurveyQuestion] {
    match survey_type {
        SurveyType::Cat => CAT_QUESTIONS,
        SurveyType::Mmrc => MMRC_QUESTIONS,
    }
}

/// A completed survey submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyResponse {
    /// Unique id of this submission
    pub response_id: String,
    /// Patient the submission belongs to
    pub patient_id: String,
    /// Which survey was answered
    pub survey_type: SurveyType,
    /// Computed total score
    pub score: i32,
    /// Raw answers keyed by question id
    pub responses: SurveyAnswers,
    /// When the survey was completed
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_values_contiguous_from_zero() {
        for question in CAT_QUESTIONS.iter().chain(MMRC_QUESTIONS) {
            for (index, option) in question.options.iter().enumerate() {
                assert_eq!(option.value, index as i32, "question {}", question.id);
            }
        }
    }

    #[test]
    fn test_catalog_shapes() {
        assert_eq!(CAT_QUESTIONS.len(), 8);
        assert_eq!(MMRC_QUESTIONS.len(), 1);
        assert!(CAT_QUESTIONS.iter().all(|q| q.max_value() == 5));
        assert_eq!(MMRC_QUESTIONS[0].max_value(), 4);
        assert!(CAT_QUESTIONS.iter().chain(MMRC_QUESTIONS).all(|q| q.required));
    }

    #[test]
    fn test_accepts_range() {
        let cough = &CAT_QUESTIONS[0];
        assert!(cough.accepts(0));
        assert!(cough.accepts(5));
        assert!(!cough.accepts(-1));
        assert!(!cough.accepts(6));
    }
}
