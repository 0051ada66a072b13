//! Plain-text rendering of command results for the terminal driver.

use crate::commands::stats::StatsPanel;
use crate::commands::CommandError;
use crate::models::checkin::CheckinReceipt;
use crate::models::record::{format_amount, DailyRecord};
use crate::models::summary::WeeklyReport;

pub const APP_TITLE: &str = "🌽 玉米成长快乐";

pub fn render_receipt(receipt: &CheckinReceipt) -> String {
    format!("{} - {}\n{}", APP_TITLE, receipt.date, receipt.message)
}

pub fn render_command_error(error: &CommandError) -> String {
    format!("❌ {}", error.message)
}

pub fn render_today(today: Option<&DailyRecord>) -> String {
    match today {
        Some(record) => format!(
            "{APP_TITLE} - 今日打卡\n今天 ({}) 已打卡，单日得分：{} 分。重新提交会覆盖今日记录。",
            record.date, record.daily_score
        ),
        None => format!(
            "{APP_TITLE} - 今日打卡\n今天还没有打卡，使用 `checkin` 子命令提交今日数据。"
        ),
    }
}

pub fn render_stats(panel: &StatsPanel) -> String {
    match panel {
        StatsPanel::Empty { message } => message.clone(),
        StatsPanel::Error { title, message } => format!("{title}\n{message}"),
        StatsPanel::Report(report) => render_report(report),
    }
}

fn render_report(report: &WeeklyReport) -> String {
    let summary = &report.summary;
    let mut lines = vec![
        format!("📈 近{}天元气战报", report.window_days),
        String::new(),
        "🎁 本周战利品".to_string(),
        summary.reward.title.clone(),
        summary.reward.description.clone(),
        String::new(),
        format!("🏆 累计得分: {} 分", summary.total_score),
        format!("📚 沉浸学习: {} 小时", format_amount(summary.total_study_hours)),
        format!("🔬 潜心科研: {} 小时", format_amount(summary.total_research_hours)),
        format!("🏃 运动天数: {} 天", summary.exercise_days),
        format!("💬 联络好友: {} 人", summary.total_friends),
        format!("💰 累计花销: {} 元", format_amount(summary.total_expense)),
        String::new(),
        "📅 历史打卡明细:".to_string(),
    ];

    lines.extend(report.entries.iter().map(|record| {
        format!(
            "{} | 得分: {} | 花销: {}元",
            record.date,
            record.daily_score,
            format_amount(record.expense_amount)
        )
    }));

    lines.join("\n")
}
