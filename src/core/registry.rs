use crate::core::{Project, Result, Transport};
use crate::utils::error::ClientError;
use crate::utils::validation::normalize_base_url;
use std::sync::Arc;

/// 專案註冊中心客戶端
pub struct RegistryClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl RegistryClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn project_url(&self) -> String {
        format!("{}/project", self.base_url)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let body = self.transport.get(&self.project_url()).await?;
        let projects: Vec<Project> = serde_json::from_str(&body)?;
        tracing::debug!("📋 Registry lists {} projects", projects.len());
        Ok(projects)
    }

    /// 回傳第一個名稱完全相符的專案
    pub async fn resolve(&self, name: &str) -> Result<Project> {
        let projects = self.list_projects().await?;

        match projects.into_iter().find(|p| p.name == name) {
            Some(project) => {
                tracing::info!(
                    "📍 Resolved project '{}' at {}:{}",
                    project.name,
                    project.ip,
                    project.port
                );
                Ok(project)
            }
            None => Err(ClientError::ProjectNotFound {
                name: name.to_string(),
            }),
        }
    }

    pub async fn register(&self, project: &Project) -> Result<String> {
        let body = serde_json::to_value(project)?;
        let reply = self.transport.post(&self.project_url(), &body).await?;
        tracing::info!("📝 Registered project '{}'", project.name);
        Ok(reply)
    }
}
