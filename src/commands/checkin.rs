use chrono::NaiveDate;

use crate::commands::{AppState, CommandError, CommandResult};
use crate::models::checkin::{CheckinForm, CheckinReceipt};
use crate::models::record::DailyRecord;
use crate::services::checkin_service::today;

/// Submits today's form.
pub fn checkin_submit(state: &AppState, form: CheckinForm) -> CommandResult<CheckinReceipt> {
    checkin_submit_for(state, form, today())
}

pub fn checkin_submit_for(
    state: &AppState,
    form: CheckinForm,
    date: NaiveDate,
) -> CommandResult<CheckinReceipt> {
    state
        .checkin()
        .submit(&form, date)
        .map_err(CommandError::from)
}

/// Today's stored record, if the user already checked in.
pub fn checkin_get_today(state: &AppState) -> CommandResult<Option<DailyRecord>> {
    state
        .checkin()
        .store()
        .find_by_date(today())
        .map_err(CommandError::from)
}
