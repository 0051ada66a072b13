use std::path::PathBuf;

use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::services::checkin_service::DEFAULT_WINDOW_DAYS;

pub const ENV_DATA_DIR: &str = "HABIT_TRACKER_DATA_DIR";
pub const ENV_WINDOW_DAYS: &str = "HABIT_TRACKER_WINDOW_DAYS";

const DEFAULT_DATABASE_FILE: &str = "bestie_discipline.db";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
    pub window_days: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from defaults overlaid with whatever `lookup` returns.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|value| !value.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir.trim());
        }

        if let Some(raw) = lookup(ENV_WINDOW_DAYS) {
            config.window_days = parse_window_days(&raw)?;
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_window_days(mut self, days: usize) -> AppResult<Self> {
        if days == 0 {
            return Err(AppError::config("统计窗口天数必须大于 0"));
        }
        self.window_days = days;
        Ok(self)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn parse_window_days(raw: &str) -> AppResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(AppError::config(format!(
            "{ENV_WINDOW_DAYS} 必须是正整数，当前值: {raw:?}"
        ))),
    }
}
