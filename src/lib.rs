pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{client_config::ClientConfig, Settings};
pub use crate::core::{
    catalog::SequenceCatalog,
    driver::RequestDriver,
    registry::RegistryClient,
    runner::{RunReport, ScenarioRunner},
    transport::HttpTransport,
};
pub use crate::domain::scenario::Scenario;
pub use crate::utils::error::{ClientError, Result};
