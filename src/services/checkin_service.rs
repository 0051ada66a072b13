use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::checkin::{CheckinForm, CheckinReceipt};
use crate::models::summary::WeeklyReport;
use crate::services::record_store::RecordStore;
use crate::services::scoring_engine;

pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// Daily check-in flow: parse, score and save a form; summarise the recent window.
pub struct CheckinService {
    store: RecordStore,
    window_days: usize,
}

impl CheckinService {
    pub fn new(store: RecordStore, window_days: usize) -> Self {
        Self {
            store,
            window_days: window_days.max(1),
        }
    }

    /// Parses the form, scores it and upserts the record for `date`.
    /// Nothing is written when the form fails to parse.
    pub fn submit(&self, form: &CheckinForm, date: NaiveDate) -> AppResult<CheckinReceipt> {
        let inputs = form.parse()?;
        let daily_score = scoring_engine::compute_score(&inputs);
        debug!(target: "app::checkin", %date, daily_score, "scored check-in");

        let record = inputs.into_record(date, daily_score);
        self.store.upsert(&record)?;

        Ok(CheckinReceipt::from_record(&record))
    }

    pub fn submit_today(&self, form: &CheckinForm) -> AppResult<CheckinReceipt> {
        self.submit(form, today())
    }

    /// Most recent `window_days` records in ascending date order with their totals.
    pub fn weekly_report(&self) -> AppResult<WeeklyReport> {
        let mut entries = self.store.recent(self.window_days)?;
        entries.sort_by_key(|record| record.date);

        let summary = scoring_engine::aggregate(&entries);
        info!(
            target: "app::checkin",
            records = entries.len(),
            total_score = summary.total_score,
            tier = %summary.reward.tier,
            "weekly report ready"
        );

        Ok(WeeklyReport {
            window_days: self.window_days,
            entries,
            summary,
        })
    }

    pub fn window_days(&self) -> usize {
        self.window_days
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
