//! KPI aggregation over daily logs and survey history
//!
//! Every function here is pure over the supplied records and the caller's
//! date window; nothing reads the clock. "No data" outcomes are defined
//! results (0 or None), never errors.

use crate::algorithm::risk;
use crate::config::{KpiConfig, MoodAlertConfig};
use crate::models::daily_log::DailyLog;
use crate::models::kpi::{
    MoodDistribution, PatientKpi, PatientRecord, ScoreTrend, SmokingSummary, SurveyStats,
};
use crate::models::patient::{PatientProfile, RiskInput};
use crate::models::survey::SurveyResponse;
use crate::models::types::{DateWindow, Mood, SurveyType};
use chrono::NaiveDate;
use itertools::Itertools;
use rayon::prelude::*;

/// Stability tolerance for the survey trend flag, in score points
const TREND_TOLERANCE: f64 = 1.0;

/// Percentage of recorded days on which medication was taken
///
/// Days without a medication entry are excluded from the denominator; with
/// no recorded day at all the rate is 0 ("no data", not an error).
#[must_use]
pub fn medication_adherence_rate(logs: &[DailyLog]) -> f64 {
    let recorded = logs
        .iter()
        .filter(|log| log.medication_taken.is_some())
        .count();
    if recorded == 0 {
        return 0.0;
    }

    let taken = logs
        .iter()
        .filter(|log| log.medication_taken == Some(true))
        .count();
    taken as f64 / recorded as f64 * 100.0
}

/// Mean exercise minutes over days with a positive entry; None without data
#[must_use]
pub fn average_exercise_minutes(logs: &[DailyLog]) -> Option<f64> {
    positive_mean(logs.iter().filter_map(|log| log.exercise_minutes))
}

/// Mean water intake over days with a positive entry; None without data
#[must_use]
pub fn average_water_intake(logs: &[DailyLog]) -> Option<f64> {
    positive_mean(logs.iter().filter_map(|log| log.water_intake_ml))
}

fn positive_mean(values: impl Iterator<Item = i32>) -> Option<f64> {
    let positive: Vec<i32> = values.filter(|value| *value > 0).collect();
    if positive.is_empty() {
        return None;
    }
    Some(positive.iter().map(|value| f64::from(*value)).sum::<f64>() / positive.len() as f64)
}

/// Partition logs into mood buckets; every log lands in exactly one
#[must_use]
pub fn mood_distribution(logs: &[DailyLog]) -> MoodDistribution {
    let mut distribution = MoodDistribution::default();
    for log in logs {
        match log.mood {
            Some(Mood::Good) => distribution.good += 1,
            Some(Mood::Neutral) => distribution.neutral += 1,
            Some(Mood::Bad) => distribution.bad += 1,
            None => distribution.unrecorded += 1,
        }
    }
    distribution
}

/// Summarize smoking behavior over a log window
///
/// `avg_per_smoking_day` divides total cigarettes by smoking days only,
/// rounded to the nearest whole cigarette; 0 when no smoking days exist.
#[must_use]
pub fn smoking_summary(logs: &[DailyLog]) -> SmokingSummary {
    let smoking_days = logs
        .iter()
        .filter(|log| log.smoking_count.is_some_and(|count| count > 0))
        .count();
    let total_cigarettes: i32 = logs.iter().filter_map(|log| log.smoking_count).sum();

    let avg_per_smoking_day = if smoking_days == 0 {
        0
    } else {
        (f64::from(total_cigarettes) / smoking_days as f64).round() as i32
    };

    SmokingSummary {
        smoking_days,
        smoking_free_days: logs.len() - smoking_days,
        total_cigarettes,
        avg_per_smoking_day,
    }
}

/// Whether the mood history should raise a clinical alert
///
/// Fires when bad days reach `min_bad_days`, or when the bad fraction of
/// recorded days exceeds `max_bad_ratio`. Never fires without mood data.
#[must_use]
pub fn has_concerning_mood_pattern(
    distribution: &MoodDistribution,
    config: &MoodAlertConfig,
) -> bool {
    if distribution.total_recorded() == 0 {
        return false;
    }

    distribution.bad >= config.min_bad_days || distribution.bad_ratio() > config.max_bad_ratio
}

/// Percentage of window days with a submitted log, capped at 100
#[must_use]
pub fn log_submission_rate(logs: &[DailyLog], window: &DateWindow) -> f64 {
    let days = window.days();
    if days <= 0 {
        return 0.0;
    }

    let submitted = logs
        .iter()
        .filter(|log| window.contains(log.log_date))
        .count();
    (submitted as f64 / days as f64 * 100.0).min(100.0)
}

/// Percentage of expected surveys completed inside the window, capped at 100
#[must_use]
pub fn survey_completion_rate(
    surveys: &[SurveyResponse],
    window: &DateWindow,
    expected: u32,
) -> f64 {
    if expected == 0 {
        return 0.0;
    }

    let completed = surveys
        .iter()
        .filter(|survey| window.contains(survey.completed_at.date_naive()))
        .count();
    (completed as f64 / f64::from(expected) * 100.0).min(100.0)
}

/// Most recent log by date
#[must_use]
pub fn latest_log(logs: &[DailyLog]) -> Option<&DailyLog> {
    logs.iter().max_by_key(|log| log.log_date)
}

/// Date of the most recent log
#[must_use]
pub fn last_log_date(logs: &[DailyLog]) -> Option<NaiveDate> {
    logs.iter().map(|log| log.log_date).max()
}

/// Days elapsed since the most recent log, relative to the caller's today
#[must_use]
pub fn days_since_last_log(logs: &[DailyLog], today: NaiveDate) -> Option<i64> {
    last_log_date(logs).map(|date| (today - date).num_days())
}

/// Days in the log set meeting the water intake goal
#[must_use]
pub fn days_meeting_water_goal(logs: &[DailyLog], goal_ml: i32) -> usize {
    logs.iter()
        .filter(|log| log.water_intake_ml.is_some_and(|ml| ml >= goal_ml))
        .count()
}

/// Days in the log set meeting the exercise goal
#[must_use]
pub fn days_meeting_exercise_goal(logs: &[DailyLog], goal_minutes: i32) -> usize {
    logs.iter()
        .filter(|log| log.exercise_minutes.is_some_and(|minutes| minutes >= goal_minutes))
        .count()
}

/// Descriptive statistics and trend over one survey type's history
///
/// The trend compares the latest score against the mean of all prior
/// scores; differences within the stability tolerance read as stable. It
/// needs at least two submissions. None without any submission.
#[must_use]
pub fn survey_stats(surveys: &[SurveyResponse]) -> Option<SurveyStats> {
    if surveys.is_empty() {
        return None;
    }

    let ordered: Vec<&SurveyResponse> = surveys
        .iter()
        .sorted_by_key(|survey| survey.completed_at)
        .collect();
    let scores: Vec<i32> = ordered.iter().map(|survey| survey.score).collect();
    let latest = ordered[ordered.len() - 1];

    let trend = if scores.len() < 2 {
        None
    } else {
        let prior = &scores[..scores.len() - 1];
        let prior_mean = f64::from(prior.iter().sum::<i32>()) / prior.len() as f64;
        let delta = f64::from(latest.score) - prior_mean;

        Some(if delta <= -TREND_TOLERANCE {
            ScoreTrend::Improving
        } else if delta >= TREND_TOLERANCE {
            ScoreTrend::Declining
        } else {
            ScoreTrend::Stable
        })
    };

    Some(SurveyStats {
        total_count: scores.len(),
        avg_score: f64::from(scores.iter().sum::<i32>()) / scores.len() as f64,
        min_score: scores.iter().copied().min().unwrap_or(0),
        max_score: scores.iter().copied().max().unwrap_or(0),
        latest_score: latest.score,
        latest_date: latest.completed_at,
        trend,
    })
}

/// Aggregate the full dashboard KPI view for one patient
///
/// Rates and distributions cover logs inside the window; latest vitals and
/// last-log recency consider the whole supplied history, with `window.end`
/// as the reference "today". Survey slices may mix CAT and mMRC.
#[must_use]
pub fn patient_kpi(
    profile: &PatientProfile,
    logs: &[DailyLog],
    surveys: &[SurveyResponse],
    window: &DateWindow,
    config: &KpiConfig,
) -> PatientKpi {
    let windowed: Vec<DailyLog> = logs
        .iter()
        .filter(|log| window.contains(log.log_date))
        .cloned()
        .collect();

    let mood = mood_distribution(&windowed);
    let smoking = smoking_summary(&windowed);

    let latest_score_of = |survey_type: SurveyType| {
        surveys
            .iter()
            .filter(|survey| survey.survey_type == survey_type)
            .max_by_key(|survey| survey.completed_at)
            .map(|survey| survey.score)
    };
    let latest_cat_score = latest_score_of(SurveyType::Cat);
    let latest_mmrc_grade = latest_score_of(SurveyType::Mmrc);

    // Fresh scores beat the stored group; a new survey may move the patient
    let gold_group = match (latest_cat_score, latest_mmrc_grade) {
        (Some(cat_score), Some(mmrc_grade)) => {
            Some(risk::classify_gold_group(cat_score, mmrc_grade))
        }
        _ => profile.gold_group,
    };

    let risk_input = RiskInput {
        gold_group,
        exacerbation_count_last_12m: profile.exacerbation_count_last_12m,
        hospitalization_count_last_12m: profile.hospitalization_count_last_12m,
    };

    let newest = latest_log(logs);

    PatientKpi {
        patient_id: profile.user_id.clone(),
        window: *window,
        medication_adherence_rate: medication_adherence_rate(&windowed),
        log_submission_rate: log_submission_rate(&windowed, window),
        survey_completion_rate: survey_completion_rate(
            surveys,
            window,
            config.expected_surveys_per_window,
        ),
        latest_bmi: profile.bmi(),
        latest_spo2: newest.and_then(|log| log.spo2),
        latest_heart_rate: newest.and_then(|log| log.heart_rate),
        latest_systolic_bp: newest.and_then(|log| log.systolic_bp),
        latest_diastolic_bp: newest.and_then(|log| log.diastolic_bp),
        latest_cat_score,
        latest_mmrc_grade,
        gold_group,
        risk_score: gold_group.map(risk::gold_group_to_risk_score),
        risk_level: Some(risk::risk_level(&risk_input)),
        last_log_date: last_log_date(logs),
        days_since_last_log: days_since_last_log(logs, window.end),
        avg_exercise_minutes: average_exercise_minutes(&windowed),
        avg_water_intake_ml: average_water_intake(&windowed),
        mood,
        smoking,
        concerning_mood_pattern: has_concerning_mood_pattern(&mood, &config.mood_alert),
    }
}

/// Compute KPIs for a whole patient roster in parallel
///
/// Output order matches the input roster.
#[must_use]
pub fn roster_kpis(
    records: &[PatientRecord],
    window: &DateWindow,
    config: &KpiConfig,
) -> Vec<PatientKpi> {
    log::debug!("aggregating KPIs for {} patients", records.len());

    records
        .par_iter()
        .map(|record| patient_kpi(&record.profile, &record.logs, &record.surveys, window, config))
        .collect()
}
