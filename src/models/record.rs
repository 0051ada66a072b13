use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's check-in. The date is the unique key; `daily_score` is the score
/// computed when the record was submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub study_hours: f64,
    pub research_hours: f64,
    pub exercise_done: bool,
    pub water_drank: bool,
    pub friends_contacted: i64,
    pub expense_amount: f64,
    pub sleep_early: bool,
    pub good_deed: bool,
    pub reading: bool,
    pub finance_study: bool,
    pub daily_score: i64,
}

impl DailyRecord {
    /// A record whose every metric is zero or unset, as loaded from a row of NULLs.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            study_hours: 0.0,
            research_hours: 0.0,
            exercise_done: false,
            water_drank: false,
            friends_contacted: 0,
            expense_amount: 0.0,
            sleep_early: false,
            good_deed: false,
            reading: false,
            finance_study: false,
            daily_score: 0,
        }
    }
}

/// Formats hours and amounts with at least one decimal place, so whole values
/// read as `7.0` rather than `7`.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
