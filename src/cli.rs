use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::commands::checkin::{checkin_get_today, checkin_submit, checkin_submit_for};
use crate::commands::stats::stats_weekly;
use crate::commands::{AppState, View};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::models::checkin::CheckinForm;
use crate::render;
use crate::utils::logger::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "habit-tracker",
    about = "Daily habit check-in with scored habits and weekly rewards",
    version
)]
pub struct Cli {
    /// Directory holding the database and logs
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    /// Number of most recent days summarised by `stats`
    #[arg(long, global = true)]
    pub window_days: Option<usize>,
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit the daily check-in form
    Checkin(CheckinArgs),
    /// Show the rolling summary and reward tier
    Stats,
}

impl Command {
    pub fn view(&self) -> View {
        match self {
            Command::Checkin(_) => View::Checkin,
            Command::Stats => View::Stats,
        }
    }
}

/// Numeric fields are taken as text so malformed values reach the form parser.
#[derive(Args, Debug, Clone)]
pub struct CheckinArgs {
    /// Study hours, in half-hour steps
    #[arg(long, default_value = "0")]
    pub study: String,
    /// Research hours, in half-hour steps
    #[arg(long, default_value = "0")]
    pub research: String,
    /// Friends contacted today (+10 each)
    #[arg(long, default_value = "0")]
    pub friends: String,
    /// Total spending today, recorded only
    #[arg(long, default_value = "0")]
    pub expense: String,
    /// Exercised today (+10)
    #[arg(long)]
    pub exercise: bool,
    /// Drank water this morning (+10)
    #[arg(long)]
    pub water: bool,
    /// Slept early and rose early (+10 / -10)
    #[arg(long)]
    pub sleep_early: bool,
    /// Did a good deed (+10 / -10)
    #[arg(long)]
    pub good_deed: bool,
    /// Read a book (+10 / -10)
    #[arg(long)]
    pub reading: bool,
    /// Studied personal finance (+10 / -10)
    #[arg(long)]
    pub finance: bool,
    /// Record for this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl CheckinArgs {
    pub fn to_form(&self) -> CheckinForm {
        CheckinForm {
            study_hours: self.study.clone(),
            research_hours: self.research.clone(),
            friends_contacted: self.friends.clone(),
            expense_amount: self.expense.clone(),
            exercise_done: self.exercise,
            water_drank: self.water,
            sleep_early: self.sleep_early,
            good_deed: self.good_deed,
            reading: self.reading,
            finance_study: self.finance,
        }
    }
}

impl Cli {
    pub fn config(&self) -> AppResult<AppConfig> {
        let mut config = AppConfig::from_env()?;
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(days) = self.window_days {
            config = config.with_window_days(days)?;
        }
        Ok(config)
    }
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.config()?;
    init_logging(&config.log_dir())?;

    let state = AppState::new(config)?;
    println!("{}", execute(&state, &cli));
    Ok(())
}

/// Runs the selected view and returns the text to print. Without a subcommand
/// the default `Checkin` view shows today's status. Command failures are
/// rendered, not propagated.
pub fn execute(state: &AppState, cli: &Cli) -> String {
    let view = cli.command.as_ref().map(Command::view).unwrap_or_default();
    debug!(target: "app::command", ?view, "executing view");

    match (view, &cli.command) {
        (View::Stats, _) => {
            let panel = stats_weekly(state);
            output(cli.json, &panel, || render::render_stats(&panel))
        }
        (View::Checkin, Some(Command::Checkin(args))) => {
            let form = args.to_form();
            let result = match args.date {
                Some(date) => checkin_submit_for(state, form, date),
                None => checkin_submit(state, form),
            };
            match result {
                Ok(receipt) => output(cli.json, &receipt, || render::render_receipt(&receipt)),
                Err(err) => output(cli.json, &err, || render::render_command_error(&err)),
            }
        }
        (View::Checkin, _) => match checkin_get_today(state) {
            Ok(today) => output(cli.json, &today, || render::render_today(today.as_ref())),
            Err(err) => output(cli.json, &err, || render::render_command_error(&err)),
        },
    }
}

fn output<T, F>(json: bool, value: &T, text: F) -> String
where
    T: Serialize,
    F: FnOnce() -> String,
{
    if json {
        serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
    } else {
        text()
    }
}
