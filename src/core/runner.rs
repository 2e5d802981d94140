use crate::core::catalog::SequenceCatalog;
use crate::core::driver::{GeneratorResponse, RequestDriver};
use crate::core::registry::RegistryClient;
use crate::core::{Project, Result, Transport};
use crate::domain::scenario::Scenario;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 一次情境執行的結果
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scenario: String,
    pub project: Project,
    pub sequence_url: String,
    pub catalog: Vec<String>,
    pub responses: Vec<GeneratorResponse>,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

impl RunReport {
    pub fn requests_per_generator(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for response in &self.responses {
            *counts.entry(response.generator.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn summary(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut summary = serde_json::Map::new();

        summary.insert("scenario".to_string(), self.scenario.clone().into());
        summary.insert("project".to_string(), self.project.name.clone().into());
        summary.insert("started_at".to_string(), self.started_at.to_rfc3339().into());
        summary.insert("total_requests".to_string(), self.responses.len().into());
        summary.insert(
            "duration_ms".to_string(),
            (self.duration.as_millis() as u64).into(),
        );

        let per_generator: serde_json::Map<String, serde_json::Value> = self
            .requests_per_generator()
            .into_iter()
            .map(|(name, count)| (name, count.into()))
            .collect();
        summary.insert(
            "requests_per_generator".to_string(),
            serde_json::Value::Object(per_generator),
        );

        summary
    }
}

/// 解析專案 -> 取得產生器清單 -> 檢查必要產生器 -> 依序送出請求
pub struct ScenarioRunner {
    transport: Arc<dyn Transport>,
    registry: RegistryClient,
}

impl ScenarioRunner {
    pub fn new(transport: Arc<dyn Transport>, registry_url: &str) -> Self {
        Self {
            registry: RegistryClient::new(transport.clone(), registry_url),
            transport,
        }
    }

    pub fn registry(&self) -> &RegistryClient {
        &self.registry
    }

    pub async fn run(&self, scenario: &Scenario, out: &mut (dyn Write + Send)) -> Result<RunReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        tracing::info!("🚀 Running scenario '{}' against '{}'", scenario.name, scenario.project);

        let project = self.registry.resolve(&scenario.project).await?;
        let sequence_url = project.sequence_url();
        writeln!(out, "{}", sequence_url)?;

        let catalog = SequenceCatalog::fetch(self.transport.as_ref(), &sequence_url).await?;
        for generator in &scenario.require_generators {
            catalog.require(generator)?;
        }

        let plan = scenario.plan();
        tracing::info!("📤 Sending {} sequence requests", plan.len());

        let driver = RequestDriver::new(self.transport.clone());
        let responses = driver.execute(&sequence_url, &plan, out).await?;

        let report = RunReport {
            scenario: scenario.name.clone(),
            project,
            sequence_url,
            catalog: catalog.names(),
            responses,
            started_at,
            duration: start.elapsed(),
        };

        tracing::info!(
            "✅ Scenario '{}' completed ({} requests, duration: {:?})",
            report.scenario,
            report.responses.len(),
            report.duration
        );

        Ok(report)
    }

    pub async fn catalog(&self, project_name: &str) -> Result<(Project, SequenceCatalog)> {
        let project = self.registry.resolve(project_name).await?;
        let catalog = SequenceCatalog::fetch(self.transport.as_ref(), &project.sequence_url()).await?;
        Ok((project, catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::presets;
    use crate::core::testing::RecordingTransport;
    use crate::utils::error::ClientError;
    use serde_json::json;

    const REGISTRY_URL: &str = "http://127.0.0.1:7878";
    const PROJECT_LIST: &str = "http://127.0.0.1:7878/project";
    const SEQUENCE_URL: &str = "http://10.0.0.7:9000/sequence";

    fn transport_for(project: &str, catalog: serde_json::Value) -> RecordingTransport {
        RecordingTransport::new()
            .route(
                "GET",
                PROJECT_LIST,
                json!([{"name": project, "ip": "10.0.0.7", "port": 9000}]),
            )
            .route("GET", SEQUENCE_URL, catalog)
            .route("POST", "http://10.0.0.7:9000/sequence/Arithmetic", json!([1.0, 4.0]))
            .route("POST", "http://10.0.0.7:9000/sequence/Smoothed", json!([1.0]))
            .route("POST", "http://10.0.0.7:9000/sequence/Geometric", json!([1.0, 0.5]))
    }

    #[tokio::test]
    async fn test_catalog_is_fetched_once_before_any_post() {
        let transport = Arc::new(transport_for("Lucija & Lev", json!([{"name": "Arithmetic"}])));
        let runner = ScenarioRunner::new(transport.clone(), REGISTRY_URL);
        let mut out = Vec::new();

        let report = runner
            .run(&presets::arithmetic_smoothed(), &mut out)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, "GET");
        assert_eq!(calls[0].url, PROJECT_LIST);
        assert_eq!(calls[1].method, "GET");
        assert_eq!(calls[1].url, SEQUENCE_URL);
        assert!(calls[2..].iter().all(|c| c.method == "POST"));

        assert_eq!(transport.count("GET", PROJECT_LIST), 1);
        assert_eq!(transport.count("GET", SEQUENCE_URL), 1);
        assert_eq!(report.responses.len(), 4);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().next(), Some(SEQUENCE_URL));
        assert_eq!(output.lines().count(), 5);
    }

    #[tokio::test]
    async fn test_missing_required_generator_stops_before_post() {
        let transport = Arc::new(transport_for(
            "Matija & Filip",
            json!([{"name": "Arithmetic"}, {"name": "Smoothed"}]),
        ));
        let runner = ScenarioRunner::new(transport.clone(), REGISTRY_URL);
        let mut out = Vec::new();

        let err = runner.run(&presets::geometric(), &mut out).await.unwrap_err();

        assert!(matches!(err, ClientError::GeneratorMissing { ref name, .. } if name == "Geometric"));
        assert!(transport.calls().iter().all(|c| c.method == "GET"));
    }

    #[tokio::test]
    async fn test_unknown_project_issues_no_sequence_request() {
        let transport = Arc::new(transport_for("Someone Else", json!([])));
        let runner = ScenarioRunner::new(transport.clone(), REGISTRY_URL);
        let mut out = Vec::new();

        let err = runner
            .run(&presets::arithmetic_smoothed(), &mut out)
            .await
            .unwrap_err();

        assert_eq!(err.exit_code(), 1);
        assert_eq!(transport.calls().len(), 1);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_report_summary_counts_generators() {
        let transport = Arc::new(transport_for(
            "Matija & Filip",
            json!([{"name": "Geometric"}]),
        ));
        let runner = ScenarioRunner::new(transport, REGISTRY_URL);
        let mut out = Vec::new();

        let report = runner.run(&presets::geometric(), &mut out).await.unwrap();
        let summary = report.summary();

        assert_eq!(summary["total_requests"], json!(10));
        assert_eq!(summary["requests_per_generator"], json!({"Geometric": 10}));
        assert_eq!(report.catalog, vec!["Geometric".to_string()]);
    }
}
