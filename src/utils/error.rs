use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    /// 寫出回應到 stdout 失敗；讀取設定檔失敗屬於 `ConfigError`
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{name} not found")]
    ProjectNotFound { name: String },

    #[error("Sequence generator '{name}' is not offered by the project (available: {})", .available.join(", "))]
    GeneratorMissing { name: String, available: Vec<String> },

    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resolution,
    Catalog,
    Network,
    Configuration,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::ProjectNotFound { .. } => ErrorCategory::Resolution,
            ClientError::GeneratorMissing { .. } => ErrorCategory::Catalog,
            ClientError::ApiError(_)
            | ClientError::IoError(_)
            | ClientError::SerializationError(_) => ErrorCategory::Network,
            ClientError::ConfigError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::UnknownScenario { .. } => ErrorCategory::Configuration,
        }
    }

    /// 程序結束碼：找不到專案為 1，其餘依類別區分
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Resolution => 1,
            ErrorCategory::Catalog => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Configuration => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ProjectNotFound { name } => format!("{} not found", name),
            ClientError::GeneratorMissing { name, .. } => {
                format!("Required sequence generator '{}' is missing", name)
            }
            ClientError::ApiError(e) => format!("Request failed: {}", e),
            ClientError::SerializationError(e) => format!("Response is not valid JSON: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Resolution => "Check that the project is registered with the registry",
            ErrorCategory::Catalog => "Check which generators the project publishes under /sequence",
            ErrorCategory::Network => "Make sure the registry and the project service are reachable",
            ErrorCategory::Configuration => "Fix the command line arguments or the config file",
        }
    }
}
