//! Daily score formula, reward tiers and rolling-window aggregation.
//!
//! Every function here is pure and total. Integer sums saturate at the `i64`
//! bounds instead of overflowing.

use crate::models::checkin::DailyInputs;
use crate::models::record::DailyRecord;
use crate::models::reward::{RewardInfo, RewardTier};
use crate::models::summary::AggregateSummary;

const POINTS_PER_FRIEND: i64 = 10;
const BONUS_POINTS: i64 = 10;
const HABIT_POINTS: i64 = 10;

/// Scores one day of inputs. `expense_amount` is recorded only and never scored.
pub fn compute_score(inputs: &DailyInputs) -> i64 {
    let hours =
        tenth_hours(inputs.study_hours).saturating_add(tenth_hours(inputs.research_hours));
    let social = inputs.friends_contacted.saturating_mul(POINTS_PER_FRIEND);
    let bonuses = bonus(inputs.exercise_done) + bonus(inputs.water_drank);
    let habits = [
        inputs.sleep_early,
        inputs.good_deed,
        inputs.reading,
        inputs.finance_study,
    ]
    .into_iter()
    .map(habit)
    .sum::<i64>();

    hours
        .saturating_add(social)
        .saturating_add(bonuses + habits)
}

/// Maps a rolling-window total to its reward tier and message.
pub fn reward_tier(total_score: i64) -> RewardInfo {
    let tier = RewardTier::for_score(total_score);
    RewardInfo {
        tier,
        title: tier.title().to_string(),
        description: tier.describe(total_score),
        color: tier.color().to_string(),
        gap_to_next: tier.gap_to_next(total_score),
    }
}

/// Sums a window of records in any order and attaches the reward tier.
pub fn aggregate(records: &[DailyRecord]) -> AggregateSummary {
    let total_score = saturating_total(records.iter().map(|record| record.daily_score));

    AggregateSummary {
        total_score,
        total_study_hours: records.iter().map(|record| record.study_hours).sum(),
        total_research_hours: records.iter().map(|record| record.research_hours).sum(),
        exercise_days: records.iter().filter(|record| record.exercise_done).count() as i64,
        total_friends: saturating_total(records.iter().map(|record| record.friends_contacted)),
        total_expense: records.iter().map(|record| record.expense_amount).sum(),
        record_count: records.len(),
        reward: reward_tier(total_score),
    }
}

fn saturating_total(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

// Truncates toward zero at one-decimal granularity.
fn tenth_hours(hours: f64) -> i64 {
    (hours * 10.0) as i64
}

fn bonus(done: bool) -> i64 {
    if done {
        BONUS_POINTS
    } else {
        0
    }
}

fn habit(kept: bool) -> i64 {
    if kept {
        HABIT_POINTS
    } else {
        -HABIT_POINTS
    }
}
