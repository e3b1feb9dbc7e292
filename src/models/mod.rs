//! Domain models for patients, surveys, daily logs and derived KPIs
//!
//! All models here are plain value objects: nullable observations are
//! explicit `Option<T>` fields, enums enumerate every recognized value,
//! and nothing holds shared mutable state.

pub mod daily_log;
pub mod kpi;
pub mod patient;
pub mod survey;
pub mod types;
