use clap::Parser;
use projekt_client::config::cli::Command;
use projekt_client::domain::model::Project;
use projekt_client::utils::logger;
use projekt_client::{
    CliConfig, ClientConfig, ClientError, HttpTransport, Result, ScenarioRunner, Settings,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.global.log_json {
        logger::init_json_logger(config.global.verbose);
    } else {
        logger::init_cli_logger(config.global.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ projekt-client failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        match &e {
            // 找不到專案時訊息印在 stdout
            ClientError::ProjectNotFound { .. } => println!("{}", e.user_friendly_message()),
            _ => eprintln!("❌ {}", e.user_friendly_message()),
        }

        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<()> {
    let file = match &config.global.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            Some(ClientConfig::from_file(path)?)
        }
        None => None,
    };

    let settings = Settings::resolve(
        file,
        config.global.registry_url.clone(),
        config.global.timeout_seconds,
    )?;

    match config.command {
        Command::Run {
            scenario,
            project,
            dry_run,
        } => {
            let scenario = settings.scenario(&scenario, project.as_deref())?;

            if dry_run {
                tracing::info!("🔍 DRY RUN MODE - No requests will be sent");
                for planned in scenario.plan() {
                    println!("{}", serde_json::to_string(&planned)?);
                }
                return Ok(());
            }

            let transport = Arc::new(HttpTransport::with_timeout(settings.timeout)?);
            let runner = ScenarioRunner::new(transport, &settings.registry_url);

            let mut stdout = std::io::stdout();
            let report = runner.run(&scenario, &mut stdout).await?;
            tracing::info!(
                "📊 Run summary: {}",
                serde_json::Value::Object(report.summary())
            );
        }
        Command::Catalog { project } => {
            let transport = Arc::new(HttpTransport::with_timeout(settings.timeout)?);
            let runner = ScenarioRunner::new(transport, &settings.registry_url);

            let (project, catalog) = runner.catalog(&project).await?;
            println!("{}", project.sequence_url());
            for entry in catalog.entries() {
                println!(
                    "{}\tparameters={}\tsequences={}\t{}",
                    entry.name,
                    entry.parameters.map_or("?".to_string(), |n| n.to_string()),
                    entry.sequences.map_or("?".to_string(), |n| n.to_string()),
                    entry.description.as_deref().unwrap_or("")
                );
            }
        }
        Command::Register { name, ip, port } => {
            let transport = Arc::new(HttpTransport::with_timeout(settings.timeout)?);
            let runner = ScenarioRunner::new(transport, &settings.registry_url);

            let reply = runner
                .registry()
                .register(&Project { name, ip, port })
                .await?;
            println!("{}", reply);
        }
    }

    Ok(())
}
