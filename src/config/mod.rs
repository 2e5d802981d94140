#[cfg(feature = "cli")]
pub mod cli;
pub mod client_config;

use crate::app::presets;
use crate::domain::scenario::Scenario;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use client_config::ClientConfig;
use std::time::Duration;

/// 合併命令列與設定檔後的執行設定（命令列優先）
#[derive(Debug, Clone)]
pub struct Settings {
    pub registry_url: String,
    pub timeout: Option<Duration>,
    file_scenario: Option<Scenario>,
}

impl Settings {
    pub fn resolve(
        file: Option<ClientConfig>,
        registry_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();
        file.validate()?;

        let registry_url = registry_url.unwrap_or(file.registry.url);
        validate_url("registry_url", &registry_url)?;

        let timeout_seconds = timeout_seconds.or(file.registry.timeout_seconds);
        if let Some(timeout) = timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        Ok(Self {
            registry_url,
            timeout: timeout_seconds.map(Duration::from_secs),
            file_scenario: file.scenario,
        })
    }

    /// 設定檔的情境優先，否則使用內建情境
    pub fn scenario(&self, preset_name: &str, project: Option<&str>) -> Result<Scenario> {
        let scenario = match &self.file_scenario {
            Some(scenario) => scenario.clone(),
            None => presets::preset(preset_name)?,
        };

        let scenario = match project {
            Some(project) => scenario.with_project(project),
            None => scenario,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}
