use crate::app::presets::DEFAULT_PRESET;
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Parser)]
#[command(name = "projekt-client")]
#[command(about = "Resolves a project through the registry and exercises its sequence generators")]
pub struct CliConfig {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct GlobalArgs {
    /// Registry base URL (overrides the config file)
    #[arg(long, global = true)]
    pub registry_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a scenario: resolve the project, check its catalog, send the requests
    Run {
        /// Built-in scenario to run when the config file defines none
        #[arg(long, default_value = DEFAULT_PRESET)]
        scenario: String,

        /// Override the scenario's target project
        #[arg(long)]
        project: Option<String>,

        /// Print the planned requests without touching the network
        #[arg(long)]
        dry_run: bool,
    },

    /// List the sequence generators a project offers
    Catalog {
        #[arg(long, default_value = "Lucija & Lev")]
        project: String,
    },

    /// Register a project with the registry
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        ip: String,

        #[arg(long)]
        port: u16,
    },
}
