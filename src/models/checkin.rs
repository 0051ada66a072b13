use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::record::{format_amount, DailyRecord};

const MAX_HOURS_PER_DAY: f64 = 24.0;
const MAX_FRIENDS_PER_DAY: i64 = 10_000;

/// Raw check-in form as collected by the presentation layer. Numeric fields
/// arrive as text; checkboxes arrive as booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinForm {
    pub study_hours: String,
    pub research_hours: String,
    pub friends_contacted: String,
    pub expense_amount: String,
    #[serde(default)]
    pub exercise_done: bool,
    #[serde(default)]
    pub water_drank: bool,
    #[serde(default)]
    pub sleep_early: bool,
    #[serde(default)]
    pub good_deed: bool,
    #[serde(default)]
    pub reading: bool,
    #[serde(default)]
    pub finance_study: bool,
}

impl Default for CheckinForm {
    fn default() -> Self {
        Self {
            study_hours: "0".to_string(),
            research_hours: "0".to_string(),
            friends_contacted: "0".to_string(),
            expense_amount: "0".to_string(),
            exercise_done: false,
            water_drank: false,
            sleep_early: false,
            good_deed: false,
            reading: false,
            finance_study: false,
        }
    }
}

impl CheckinForm {
    pub fn parse(&self) -> AppResult<DailyInputs> {
        Ok(DailyInputs {
            study_hours: parse_hours("study_hours", &self.study_hours)?,
            research_hours: parse_hours("research_hours", &self.research_hours)?,
            friends_contacted: parse_count("friends_contacted", &self.friends_contacted)?,
            expense_amount: parse_amount("expense_amount", &self.expense_amount)?,
            exercise_done: self.exercise_done,
            water_drank: self.water_drank,
            sleep_early: self.sleep_early,
            good_deed: self.good_deed,
            reading: self.reading,
            finance_study: self.finance_study,
        })
    }
}

/// Validated daily inputs. Every numeric field is finite and non-negative, hours
/// are at most 24 and the friend count is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInputs {
    pub study_hours: f64,
    pub research_hours: f64,
    pub friends_contacted: i64,
    pub expense_amount: f64,
    pub exercise_done: bool,
    pub water_drank: bool,
    pub sleep_early: bool,
    pub good_deed: bool,
    pub reading: bool,
    pub finance_study: bool,
}

impl DailyInputs {
    pub fn into_record(self, date: NaiveDate, daily_score: i64) -> DailyRecord {
        DailyRecord {
            date,
            study_hours: self.study_hours,
            research_hours: self.research_hours,
            exercise_done: self.exercise_done,
            water_drank: self.water_drank,
            friends_contacted: self.friends_contacted,
            expense_amount: self.expense_amount,
            sleep_early: self.sleep_early,
            good_deed: self.good_deed,
            reading: self.reading,
            finance_study: self.finance_study,
            daily_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinReceipt {
    pub date: NaiveDate,
    pub daily_score: i64,
    pub expense_amount: f64,
    pub message: String,
}

impl CheckinReceipt {
    pub fn from_record(record: &DailyRecord) -> Self {
        Self {
            date: record.date,
            daily_score: record.daily_score,
            expense_amount: record.expense_amount,
            message: format!(
                "打卡成功！今日花销 {}元\n单日得分：{} 分",
                format_amount(record.expense_amount),
                record.daily_score
            ),
        }
    }
}

fn parse_amount(field: &str, raw: &str) -> AppResult<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::input_format(field, raw))?;

    if !value.is_finite() || value < 0.0 {
        return Err(AppError::input_format(field, raw));
    }

    Ok(value)
}

fn parse_hours(field: &str, raw: &str) -> AppResult<f64> {
    let value = parse_amount(field, raw)?;
    if value > MAX_HOURS_PER_DAY {
        return Err(AppError::input_format(field, raw));
    }
    Ok(value)
}

fn parse_count(field: &str, raw: &str) -> AppResult<i64> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::input_format(field, raw))?;

    if !(0..=MAX_FRIENDS_PER_DAY).contains(&value) {
        return Err(AppError::input_format(field, raw));
    }

    Ok(value)
}
