use thiserror::Error;
use tracing::{error, warn};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("输入格式错误: {field} = {value:?}")]
    InputFormat { field: String, value: String },

    #[error("存储错误: {message}")]
    Storage { message: String },

    #[error("配置错误: {message}")]
    Config { message: String },
}

impl AppError {
    pub fn input_format(field: impl Into<String>, value: impl Into<String>) -> Self {
        let field = field.into();
        let value = value.into();
        warn!(target: "app::validation", %field, %value, "input format error");
        AppError::InputFormat { field, value }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::db", %message, "storage error");
        AppError::Storage { message }
    }

    pub fn config(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(target: "app::config", %message, "configuration error");
        AppError::Config { message }
    }

    pub fn is_input_format(&self) -> bool {
        matches!(self, AppError::InputFormat { .. })
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage { .. })
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(error: rusqlite::Error) -> Self {
        error!(target: "app::db", error = ?error, "sqlite error");
        AppError::storage(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::storage(format!("文件系统读写失败: {error}"))
    }
}
