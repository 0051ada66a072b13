use chrono::NaiveDate;
use tracing::{debug, info};

use crate::db::repositories::record_repository::RecordRepository;
use crate::db::Database;
use crate::error::AppResult;
use crate::models::record::DailyRecord;

/// Durable one-record-per-day store over a single long-lived connection.
pub struct RecordStore {
    db: Database,
}

impl RecordStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Inserts the record, or replaces every field of the one stored for its date.
    /// The score is stored as given.
    pub fn upsert(&self, record: &DailyRecord) -> AppResult<()> {
        self.db
            .with_connection(|conn| RecordRepository::upsert(conn, record))?;
        info!(
            target: "app::checkin",
            date = %record.date,
            daily_score = record.daily_score,
            "record saved"
        );
        Ok(())
    }

    /// Up to `n` records, newest date first. Empty when nothing is stored.
    pub fn recent(&self, n: usize) -> AppResult<Vec<DailyRecord>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let records = self
            .db
            .with_connection(|conn| RecordRepository::list_recent(conn, n))?;
        debug!(target: "app::db", requested = n, returned = records.len(), "loaded recent records");
        Ok(records)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> AppResult<Option<DailyRecord>> {
        self.db
            .with_connection(|conn| RecordRepository::find_by_date(conn, &date))
    }

    pub fn count(&self) -> AppResult<i64> {
        self.db.with_connection(RecordRepository::count)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
