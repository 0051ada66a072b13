use serde::Serialize;
use tracing::error;

use crate::commands::AppState;
use crate::models::summary::WeeklyReport;

pub const EMPTY_STATS_MESSAGE: &str = "暂无打卡数据，快去首页打卡吧！";
pub const STATS_ERROR_TITLE: &str = "⚠️ 数据读取出错！";

/// What the stats screen shows. Read failures become a panel, never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StatsPanel {
    Empty { message: String },
    Report(WeeklyReport),
    Error { title: String, message: String },
}

pub fn stats_weekly(state: &AppState) -> StatsPanel {
    match state.checkin().weekly_report() {
        Ok(report) if report.is_empty() => StatsPanel::Empty {
            message: EMPTY_STATS_MESSAGE.to_string(),
        },
        Ok(report) => StatsPanel::Report(report),
        Err(err) => {
            error!(target: "app::command", error = %err, "failed to load weekly stats");
            StatsPanel::Error {
                title: STATS_ERROR_TITLE.to_string(),
                message: format!("错误信息: {err}"),
            }
        }
    }
}
