//! GOLD ABE risk classification
//!
//! Implements the GOLD 2011 ABE grouping from CAT and mMRC scores, the
//! legacy risk-level/score mapping kept for older dashboard displays, and
//! an exacerbation-history fallback for patients with no GOLD assessment
//! data yet.

use crate::algorithm::score::{CAT_MAX_SCORE, MMRC_MAX_GRADE};
use crate::error::{Result, ScoringError};
use crate::models::patient::{PatientProfile, RiskAssessment, RiskInput};
use crate::models::types::{GoldGroup, RiskLevel};
use chrono::{DateTime, Utc};

/// Classify a patient into a GOLD ABE group from CAT and mMRC scores
///
/// Total over in-range inputs: exactly one of A, B or E applies to every
/// (CAT, mMRC) pair.
#[must_use]
pub const fn classify_gold_group(cat_score: i32, mmrc_grade: i32) -> GoldGroup {
    let high_cat = cat_score >= 10;
    let high_mmrc = mmrc_grade >= 2;

    match (high_cat, high_mmrc) {
        (true, true) => GoldGroup::E,
        (false, false) => GoldGroup::A,
        _ => GoldGroup::B,
    }
}

/// Map a GOLD group to the legacy risk level
///
/// Critical is unreachable from this mapping; only the exacerbation
/// fallback can produce it.
#[must_use]
pub const fn gold_group_to_risk_level(group: GoldGroup) -> RiskLevel {
    match group {
        GoldGroup::A => RiskLevel::Low,
        GoldGroup::B => RiskLevel::Medium,
        GoldGroup::E => RiskLevel::High,
    }
}

/// Map a GOLD group to the legacy 0-100 risk score
#[must_use]
pub const fn gold_group_to_risk_score(group: GoldGroup) -> i32 {
    match group {
        GoldGroup::A => 25,
        GoldGroup::B => 50,
        GoldGroup::E => 75,
    }
}

/// A single risk-resolution strategy; None when not applicable
type RiskResolver = fn(&RiskInput) -> Option<RiskLevel>;

/// Resolution strategies in priority order; the first applicable wins.
/// New tiers slot in here without restructuring the dispatch.
const RESOLVERS: &[(&str, RiskResolver)] = &[
    ("gold-abe", resolve_from_gold_group),
    ("exacerbation-history", resolve_from_history),
];

fn resolve_from_gold_group(input: &RiskInput) -> Option<RiskLevel> {
    input.gold_group.map(gold_group_to_risk_level)
}

/// Coarse heuristic on 12-month exacerbation history; missing counts are
/// treated as zero. Unlike the GOLD mapping, this tier can reach Critical.
fn resolve_from_history(input: &RiskInput) -> Option<RiskLevel> {
    let exacerbations = input.exacerbation_count_last_12m.unwrap_or(0);
    let hospitalizations = input.hospitalization_count_last_12m.unwrap_or(0);

    let level = if exacerbations >= 3 || hospitalizations >= 2 {
        RiskLevel::Critical
    } else if exacerbations >= 2 || hospitalizations >= 1 {
        RiskLevel::High
    } else if exacerbations == 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    Some(level)
}

/// Resolve a patient's risk level through the strategy chain
///
/// A stored GOLD group is authoritative even when a severe exacerbation
/// history coexists; the deciding strategy is logged at debug level.
#[must_use]
pub fn risk_level(input: &RiskInput) -> RiskLevel {
    for (name, resolver) in RESOLVERS {
        if let Some(level) = resolver(input) {
            log::debug!("risk level {level:?} resolved by {name} strategy");
            return level;
        }
    }

    RiskLevel::Low
}

/// Perform a full GOLD ABE risk assessment for a patient
///
/// Rejects out-of-range scores. The caller supplies the assessment
/// timestamp; nothing here reads the clock.
pub fn assess(
    patient: &PatientProfile,
    cat_score: i32,
    mmrc_grade: i32,
    assessed_at: DateTime<Utc>,
) -> Result<RiskAssessment> {
    if !(0..=CAT_MAX_SCORE).contains(&cat_score) {
        return Err(ScoringError::ScoreOutOfRange {
            scale: "CAT",
            value: cat_score,
            min: 0,
            max: CAT_MAX_SCORE,
        });
    }
    if !(0..=MMRC_MAX_GRADE).contains(&mmrc_grade) {
        return Err(ScoringError::ScoreOutOfRange {
            scale: "mMRC",
            value: mmrc_grade,
            min: 0,
            max: MMRC_MAX_GRADE,
        });
    }

    let gold_group = classify_gold_group(cat_score, mmrc_grade);

    Ok(RiskAssessment {
        patient_id: patient.user_id.clone(),
        cat_score,
        mmrc_grade,
        exacerbation_count_12m: patient.exacerbation_count_last_12m.unwrap_or(0),
        hospitalization_count_12m: patient.hospitalization_count_last_12m.unwrap_or(0),
        gold_group,
        risk_score: gold_group_to_risk_score(gold_group),
        risk_level: gold_group_to_risk_level(gold_group),
        assessed_at,
    })
}
