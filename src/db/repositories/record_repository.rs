use std::convert::TryFrom;

use chrono::NaiveDate;
use rusqlite::{named_params, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::record::DailyRecord;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `records` row. Every metric column is nullable in the schema.
#[derive(Debug, Clone, Default)]
pub struct DailyRecordRow {
    pub date: String,
    pub study_hours: Option<f64>,
    pub research_hours: Option<f64>,
    pub exercise_done: Option<i64>,
    pub water_drank: Option<i64>,
    pub friends_contacted: Option<i64>,
    pub expense_amount: Option<f64>,
    pub sleep_early: Option<i64>,
    pub good_deed: Option<i64>,
    pub reading: Option<i64>,
    pub finance_study: Option<i64>,
    pub daily_score: Option<i64>,
}

impl DailyRecordRow {
    pub fn from_record(record: &DailyRecord) -> Self {
        Self {
            date: record.date.format(DATE_FORMAT).to_string(),
            study_hours: Some(record.study_hours),
            research_hours: Some(record.research_hours),
            exercise_done: Some(flag(record.exercise_done)),
            water_drank: Some(flag(record.water_drank)),
            friends_contacted: Some(record.friends_contacted),
            expense_amount: Some(record.expense_amount),
            sleep_early: Some(flag(record.sleep_early)),
            good_deed: Some(flag(record.good_deed)),
            reading: Some(flag(record.reading)),
            finance_study: Some(flag(record.finance_study)),
            daily_score: Some(record.daily_score),
        }
    }

    /// Missing metrics load as zero / false.
    pub fn into_record(self) -> AppResult<DailyRecord> {
        let date = parse_date(&self.date)
            .ok_or_else(|| AppError::storage(format!("无效的日期: {:?}", self.date)))?;

        if self.daily_score.is_none() {
            debug!(target: "app::db", date = %self.date, "record without stored score");
        }

        Ok(DailyRecord {
            date,
            study_hours: self.study_hours.unwrap_or(0.0),
            research_hours: self.research_hours.unwrap_or(0.0),
            exercise_done: is_set(self.exercise_done),
            water_drank: is_set(self.water_drank),
            friends_contacted: self.friends_contacted.unwrap_or(0),
            expense_amount: self.expense_amount.unwrap_or(0.0),
            sleep_early: is_set(self.sleep_early),
            good_deed: is_set(self.good_deed),
            reading: is_set(self.reading),
            finance_study: is_set(self.finance_study),
            daily_score: self.daily_score.unwrap_or(0),
        })
    }
}

impl TryFrom<&Row<'_>> for DailyRecordRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            date: row.get("date")?,
            study_hours: row.get("study_hours")?,
            research_hours: row.get("research_hours")?,
            exercise_done: row.get("exercise_done")?,
            water_drank: row.get("water_drank")?,
            friends_contacted: row.get("friends_contacted")?,
            expense_amount: row.get("expense_amount")?,
            sleep_early: row.get("sleep_early")?,
            good_deed: row.get("good_deed")?,
            reading: row.get("reading")?,
            finance_study: row.get("finance_study")?,
            daily_score: row.get("daily_score")?,
        })
    }
}

pub struct RecordRepository;

impl RecordRepository {
    /// Insert-or-replace keyed by date. Every column is overwritten on conflict.
    pub fn upsert(conn: &Connection, record: &DailyRecord) -> AppResult<()> {
        let row = DailyRecordRow::from_record(record);

        conn.execute(
            r#"
                INSERT INTO records (
                    date,
                    study_hours,
                    research_hours,
                    exercise_done,
                    water_drank,
                    friends_contacted,
                    expense_amount,
                    sleep_early,
                    good_deed,
                    reading,
                    finance_study,
                    daily_score
                ) VALUES (
                    :date,
                    :study_hours,
                    :research_hours,
                    :exercise_done,
                    :water_drank,
                    :friends_contacted,
                    :expense_amount,
                    :sleep_early,
                    :good_deed,
                    :reading,
                    :finance_study,
                    :daily_score
                )
                ON CONFLICT(date) DO UPDATE SET
                    study_hours = excluded.study_hours,
                    research_hours = excluded.research_hours,
                    exercise_done = excluded.exercise_done,
                    water_drank = excluded.water_drank,
                    friends_contacted = excluded.friends_contacted,
                    expense_amount = excluded.expense_amount,
                    sleep_early = excluded.sleep_early,
                    good_deed = excluded.good_deed,
                    reading = excluded.reading,
                    finance_study = excluded.finance_study,
                    daily_score = excluded.daily_score
            "#,
            named_params! {
                ":date": &row.date,
                ":study_hours": &row.study_hours,
                ":research_hours": &row.research_hours,
                ":exercise_done": &row.exercise_done,
                ":water_drank": &row.water_drank,
                ":friends_contacted": &row.friends_contacted,
                ":expense_amount": &row.expense_amount,
                ":sleep_early": &row.sleep_early,
                ":good_deed": &row.good_deed,
                ":reading": &row.reading,
                ":finance_study": &row.finance_study,
                ":daily_score": &row.daily_score,
            },
        )?;

        Ok(())
    }

    pub fn find_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DailyRecord>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    date,
                    study_hours,
                    research_hours,
                    exercise_done,
                    water_drank,
                    friends_contacted,
                    expense_amount,
                    sleep_early,
                    good_deed,
                    reading,
                    finance_study,
                    daily_score
                FROM records
                WHERE date = :date
            "#,
        )?;

        let row = stmt
            .query_row(
                named_params! {":date": date.format(DATE_FORMAT).to_string()},
                |row| DailyRecordRow::try_from(row),
            )
            .optional()?;

        row.map(|row| row.into_record()).transpose()
    }

    /// Most recent `limit` records, newest first. Rows whose date is not ISO
    /// `YYYY-MM-DD` are skipped with a warning and still count toward `limit`.
    pub fn list_recent(conn: &Connection, limit: usize) -> AppResult<Vec<DailyRecord>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    date,
                    study_hours,
                    research_hours,
                    exercise_done,
                    water_drank,
                    friends_contacted,
                    expense_amount,
                    sleep_early,
                    good_deed,
                    reading,
                    finance_study,
                    daily_score
                FROM records
                ORDER BY date DESC
                LIMIT :limit
            "#,
        )?;

        let rows = stmt
            .query_map(named_params! {":limit": limit as i64}, |row| {
                DailyRecordRow::try_from(row)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .filter(|row| {
                let readable = parse_date(&row.date).is_some();
                if !readable {
                    warn!(target: "app::db", date = %row.date, "skipping record with unreadable date");
                }
                readable
            })
            .map(DailyRecordRow::into_record)
            .collect()
    }

    pub fn count(conn: &Connection) -> AppResult<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn flag(value: bool) -> i64 {
    i64::from(value)
}

fn is_set(value: Option<i64>) -> bool {
    value.unwrap_or(0) != 0
}
