use serde::{Deserialize, Serialize};

use crate::models::record::DailyRecord;
use crate::models::reward::RewardInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total_score: i64,
    pub total_study_hours: f64,
    pub total_research_hours: f64,
    pub exercise_days: i64,
    pub total_friends: i64,
    pub total_expense: f64,
    pub record_count: usize,
    pub reward: RewardInfo,
}

/// Rolling-window report: entries in ascending date order plus their totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub window_days: usize,
    pub entries: Vec<DailyRecord>,
    pub summary: AggregateSummary,
}

impl WeeklyReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
