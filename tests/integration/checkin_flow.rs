//! End-to-end check-in flow: form parsing, scoring, persistence and the
//! terminal driver's rendering.

use chrono::NaiveDate;
use clap::Parser;
use habit_tracker_lib::cli::{execute, Cli};
use habit_tracker_lib::commands::checkin::checkin_submit_for;
use habit_tracker_lib::commands::AppState;
use habit_tracker_lib::config::AppConfig;
use habit_tracker_lib::models::checkin::CheckinForm;
use tempfile::{tempdir, TempDir};

fn setup_test_env() -> (AppState, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = AppConfig::default().with_data_dir(temp_dir.path().join("data"));
    let state = AppState::new(config).expect("Failed to build app state");
    (state, temp_dir)
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

fn reference_form() -> CheckinForm {
    CheckinForm {
        study_hours: "2.0".to_string(),
        research_hours: "1.5".to_string(),
        friends_contacted: "2".to_string(),
        expense_amount: "23.5".to_string(),
        exercise_done: true,
        water_drank: false,
        sleep_early: true,
        good_deed: false,
        reading: true,
        finance_study: false,
    }
}

#[test]
fn test_submit_reference_day() {
    let (state, _temp_dir) = setup_test_env();

    let receipt = checkin_submit_for(&state, reference_form(), date(1)).unwrap();
    assert_eq!(receipt.date, date(1));
    assert_eq!(receipt.daily_score, 65);
    assert_eq!(receipt.message, "打卡成功！今日花销 23.5元\n单日得分：65 分");

    let stored = state.checkin().store().find_by_date(date(1)).unwrap().unwrap();
    assert_eq!(stored.friends_contacted, 2);
    assert_eq!(stored.expense_amount, 23.5);
    assert!(stored.sleep_early && stored.reading);
}

#[test]
fn test_resubmitting_same_day_overwrites() {
    let (state, _temp_dir) = setup_test_env();
    checkin_submit_for(&state, reference_form(), date(2)).unwrap();

    let lazier = CheckinForm {
        study_hours: "0".to_string(),
        research_hours: "0".to_string(),
        exercise_done: false,
        ..reference_form()
    };
    let receipt = checkin_submit_for(&state, lazier, date(2)).unwrap();
    assert_eq!(receipt.daily_score, 20);

    let store = state.checkin().store();
    assert_eq!(store.count().unwrap(), 1);
    let stored = store.find_by_date(date(2)).unwrap().unwrap();
    assert_eq!(stored.daily_score, 20);
    assert_eq!(stored.study_hours, 0.0);
    assert!(!stored.exercise_done);
}

#[test]
fn test_database_created_under_data_dir() {
    let (state, temp_dir) = setup_test_env();
    checkin_submit_for(&state, reference_form(), date(3)).unwrap();

    assert!(temp_dir
        .path()
        .join("data")
        .join("bestie_discipline.db")
        .exists());
    assert_eq!(
        state.checkin().store().database().path(),
        Some(state.config().database_path().as_path())
    );
}

#[test]
fn test_driver_checkin_then_stats() {
    let (state, _temp_dir) = setup_test_env();

    let checkin = Cli::try_parse_from([
        "habit-tracker",
        "checkin",
        "--study",
        "2",
        "--research",
        "1.5",
        "--friends",
        "2",
        "--exercise",
        "--sleep-early",
        "--reading",
        "--date",
        "2026-08-04",
    ])
    .unwrap();
    let output = execute(&state, &checkin);
    assert!(output.contains("单日得分：65 分"), "{output}");

    let stats = Cli::try_parse_from(["habit-tracker", "stats"]).unwrap();
    let output = execute(&state, &stats);
    assert!(output.contains("🏆 累计得分: 65 分"), "{output}");
    assert!(output.contains("2026-08-04 | 得分: 65 | 花销: 0.0元"), "{output}");
}

#[test]
fn test_driver_reports_bad_numbers_without_saving() {
    let (state, _temp_dir) = setup_test_env();

    let cli = Cli::try_parse_from(["habit-tracker", "checkin", "--friends", "two"]).unwrap();
    let output = execute(&state, &cli);
    assert!(output.contains("请检查数字格式是否正确！"), "{output}");
    assert_eq!(state.checkin().store().count().unwrap(), 0);
}

#[test]
fn test_driver_json_output() {
    let (state, _temp_dir) = setup_test_env();

    let cli = Cli::try_parse_from([
        "habit-tracker",
        "--json",
        "checkin",
        "--water",
        "--date",
        "2026-08-05",
    ])
    .unwrap();
    let output = execute(&state, &cli);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["dailyScore"], -30);
    assert_eq!(value["date"], "2026-08-05");
}
