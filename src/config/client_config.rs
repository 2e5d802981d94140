use crate::domain::scenario::Scenario;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REGISTRY_URL: &str = "http://127.0.0.1:7878";

const RANGE_SHAPE_HINT: &str =
    "\nhint: a step range is either { from = <u64>, to = <u64>, step = <u64> } or { window = <u64>, step = <u64> }";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    pub scenario: Option<Scenario>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_url")]
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
            timeout_seconds: None,
        }
    }
}

impl RegistryConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl ClientConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ClientError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| {
            let mut message = format!("TOML parsing error: {}", e);
            if message.contains("untagged enum RangeTemplate") {
                message.push_str(RANGE_SHAPE_HINT);
            }
            ClientError::ConfigError { message }
        })
    }

    /// 替換 `${VAR}` 環境變數，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("registry.url", &self.registry.url)?;

        if let Some(timeout) = self.registry.timeout_seconds {
            validate_positive_number("registry.timeout_seconds", timeout, 1)?;
        }

        if let Some(scenario) = &self.scenario {
            scenario.validate()?;
        }

        Ok(())
    }
}
