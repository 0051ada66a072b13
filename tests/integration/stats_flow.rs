//! Weekly stats: rolling window, totals and reward tiers through the command boundary.

use chrono::NaiveDate;
use habit_tracker_lib::commands::stats::{stats_weekly, StatsPanel, EMPTY_STATS_MESSAGE};
use habit_tracker_lib::commands::AppState;
use habit_tracker_lib::config::AppConfig;
use habit_tracker_lib::db::Database;
use habit_tracker_lib::models::record::DailyRecord;
use habit_tracker_lib::models::reward::RewardTier;
use habit_tracker_lib::models::summary::WeeklyReport;

fn in_memory_state(window_days: usize) -> AppState {
    let config = AppConfig::default()
        .with_window_days(window_days)
        .expect("window");
    let db = Database::open_in_memory().expect("in-memory database");
    AppState::with_database(config, db)
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
}

fn seed(state: &AppState, day: u32, score: i64) {
    let record = DailyRecord {
        study_hours: 1.0,
        exercise_done: day % 2 == 0,
        friends_contacted: 1,
        expense_amount: 10.0,
        daily_score: score,
        ..DailyRecord::blank(date(day))
    };
    state.checkin().store().upsert(&record).unwrap();
}

fn expect_report(panel: StatsPanel) -> WeeklyReport {
    match panel {
        StatsPanel::Report(report) => report,
        other => panic!("expected report, got {other:?}"),
    }
}

#[test]
fn test_empty_store_shows_empty_panel() {
    let state = in_memory_state(7);
    assert_eq!(
        stats_weekly(&state),
        StatsPanel::Empty {
            message: EMPTY_STATS_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_window_keeps_latest_days_ascending() {
    let state = in_memory_state(7);
    for day in (1..=10).rev() {
        seed(&state, day, 100);
    }

    let report = expect_report(stats_weekly(&state));
    let dates: Vec<NaiveDate> = report.entries.iter().map(|record| record.date).collect();
    assert_eq!(dates, (4..=10).map(date).collect::<Vec<_>>());

    let summary = &report.summary;
    assert_eq!(summary.record_count, 7);
    assert_eq!(summary.total_score, 700);
    assert_eq!(summary.total_study_hours, 7.0);
    assert_eq!(summary.total_friends, 7);
    assert_eq!(summary.total_expense, 70.0);
    assert_eq!(summary.exercise_days, 4);
    assert_eq!(summary.reward.tier, RewardTier::Bronze);
    assert_eq!(summary.reward.gap_to_next, Some(100));
}

#[test]
fn test_top_tier_has_no_gap() {
    let state = in_memory_state(7);
    for day in 1..=6 {
        seed(&state, day, 200);
    }

    let report = expect_report(stats_weekly(&state));
    assert_eq!(report.summary.total_score, 1200);
    assert_eq!(report.summary.reward.tier, RewardTier::Master);
    assert_eq!(report.summary.reward.gap_to_next, None);
    assert_eq!(report.summary.reward.color, "#d97706");
}

#[test]
fn test_negative_week_stays_in_base_tier() {
    let state = in_memory_state(7);
    seed(&state, 1, -40);
    seed(&state, 2, -10);

    let report = expect_report(stats_weekly(&state));
    assert_eq!(report.summary.total_score, -50);
    assert_eq!(report.summary.reward.tier, RewardTier::Newcomer);
    assert_eq!(report.summary.reward.gap_to_next, Some(650));
    assert!(report.summary.reward.description.contains("650"));
}

#[test]
fn test_configured_window_length() {
    let state = in_memory_state(3);
    for day in 1..=5 {
        seed(&state, day, 50);
    }

    let report = expect_report(stats_weekly(&state));
    assert_eq!(report.window_days, 3);
    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.entries[0].date, date(3));
    assert_eq!(report.summary.total_score, 150);
}
