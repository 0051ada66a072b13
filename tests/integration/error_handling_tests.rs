// Error handling and edge case tests

use chrono::NaiveDate;
use habit_tracker_lib::commands::checkin::checkin_submit_for;
use habit_tracker_lib::commands::stats::{stats_weekly, StatsPanel, STATS_ERROR_TITLE};
use habit_tracker_lib::commands::{AppState, CommandError, INPUT_FORMAT_MESSAGE};
use habit_tracker_lib::config::AppConfig;
use habit_tracker_lib::db::Database;
use habit_tracker_lib::error::AppError;
use habit_tracker_lib::models::checkin::CheckinForm;
use tempfile::{tempdir, TempDir};

fn setup_test_environment() -> (AppState, TempDir) {
    let dir = tempdir().expect("temp dir");
    let config = AppConfig::default().with_data_dir(dir.path());
    let state = AppState::new(config).expect("app state");
    (state, dir)
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()
}

#[test]
fn test_unparseable_hours_report_input_format() {
    let (state, _dir) = setup_test_environment();
    let form = CheckinForm {
        study_hours: "2,5".to_string(),
        ..CheckinForm::default()
    };

    let err = checkin_submit_for(&state, form, day()).unwrap_err();
    assert_eq!(err.code, "INPUT_FORMAT");
    assert_eq!(err.message, INPUT_FORMAT_MESSAGE);
    assert_eq!(state.checkin().store().count().unwrap(), 0);
}

#[test]
fn test_rejected_resubmission_keeps_previous_record() {
    let (state, _dir) = setup_test_environment();
    let valid = CheckinForm {
        study_hours: "1".to_string(),
        ..CheckinForm::default()
    };
    let first = checkin_submit_for(&state, valid, day()).unwrap();

    let broken = CheckinForm {
        expense_amount: "¥20".to_string(),
        ..CheckinForm::default()
    };
    assert!(checkin_submit_for(&state, broken, day()).is_err());

    let stored = state
        .checkin()
        .store()
        .find_by_date(day())
        .unwrap()
        .unwrap();
    assert_eq!(stored.daily_score, first.daily_score);
    assert_eq!(stored.study_hours, 1.0);
}

#[test]
fn test_stats_read_failure_becomes_error_panel() {
    let (state, _dir) = setup_test_environment();
    state
        .checkin()
        .store()
        .database()
        .connection()
        .execute("DROP TABLE records", [])
        .unwrap();

    match stats_weekly(&state) {
        StatsPanel::Error { title, message } => {
            assert_eq!(title, STATS_ERROR_TITLE);
            assert!(message.starts_with("错误信息: "));
            assert!(message.contains("records"), "{message}");
        }
        other => panic!("expected error panel, got {other:?}"),
    }
}

#[test]
fn test_unreadable_date_is_skipped_in_stats() {
    let (state, _dir) = setup_test_environment();
    let valid = CheckinForm {
        study_hours: "1".to_string(),
        ..CheckinForm::default()
    };
    let receipt = checkin_submit_for(&state, valid, day()).unwrap();
    state
        .checkin()
        .store()
        .database()
        .connection()
        .execute(
            "INSERT INTO records (date, daily_score) VALUES ('yesterday', 10)",
            [],
        )
        .unwrap();

    match stats_weekly(&state) {
        StatsPanel::Report(report) => {
            assert_eq!(report.entries.len(), 1);
            assert_eq!(report.entries[0].date, day());
            assert_eq!(report.summary.total_score, receipt.daily_score);
        }
        other => panic!("expected report panel, got {other:?}"),
    }
}

#[test]
fn test_only_unreadable_dates_show_empty_panel() {
    let (state, _dir) = setup_test_environment();
    state
        .checkin()
        .store()
        .database()
        .connection()
        .execute(
            "INSERT INTO records (date, daily_score) VALUES ('07/01/2026', 10)",
            [],
        )
        .unwrap();

    assert!(matches!(stats_weekly(&state), StatsPanel::Empty { .. }));
}

#[test]
fn test_write_failure_is_storage_error() {
    let (state, _dir) = setup_test_environment();
    state
        .checkin()
        .store()
        .database()
        .connection()
        .execute("DROP TABLE records", [])
        .unwrap();

    let err = checkin_submit_for(&state, CheckinForm::default(), day()).unwrap_err();
    assert_eq!(err.code, "STORAGE");
    assert!(err.message.contains("records"));
}

#[test]
fn test_unopenable_database_is_storage_error() {
    let dir = tempdir().expect("temp dir");
    let blocker = dir.path().join("not-a-directory");
    std::fs::write(&blocker, b"plain file").unwrap();

    let err = Database::open(blocker.join("records.db")).unwrap_err();
    assert!(err.is_storage(), "{err:?}");

    let command_error = CommandError::from(err);
    assert_eq!(command_error.code, "STORAGE");
}

#[test]
fn test_config_errors_map_to_config_code() {
    let err = AppConfig::default().with_window_days(0).unwrap_err();
    assert!(matches!(err, AppError::Config { .. }));
    assert_eq!(CommandError::from(err).code, "CONFIG");
}
