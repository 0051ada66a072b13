pub mod checkin;
pub mod stats;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::db::Database;
use crate::error::{AppError, AppResult};
use crate::services::checkin_service::CheckinService;
use crate::services::record_store::RecordStore;

pub const INPUT_FORMAT_MESSAGE: &str = "请检查数字格式是否正确！";

/// Everything the presentation layer needs, built once at startup.
pub struct AppState {
    config: AppConfig,
    checkin_service: CheckinService,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let db = Database::open(config.database_path())?;
        info!(
            target: "app::db",
            db_path = %config.database_path().display(),
            window_days = config.window_days,
            "application state ready"
        );
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: AppConfig, db: Database) -> Self {
        let checkin_service = CheckinService::new(RecordStore::new(db), config.window_days);
        Self {
            config,
            checkin_service,
        }
    }

    pub fn checkin(&self) -> &CheckinService {
        &self.checkin_service
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// The two mutually exclusive screens: the daily form and the weekly stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Checkin,
    Stats,
}

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl CommandError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Option<JsonValue>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details,
        }
    }
}

impl From<AppError> for CommandError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::InputFormat { field, value } => {
                warn!(target: "app::command", %field, %value, "input format error in command");
                CommandError::new(
                    "INPUT_FORMAT",
                    INPUT_FORMAT_MESSAGE,
                    Some(serde_json::json!({ "field": field, "value": value })),
                )
            }
            AppError::Storage { message } => {
                error!(target: "app::command", %message, "storage error in command");
                CommandError::new("STORAGE", message, None)
            }
            AppError::Config { message } => {
                error!(target: "app::command", %message, "configuration error in command");
                CommandError::new("CONFIG", message, None)
            }
        }
    }
}
