use crate::core::{Result, SequenceInfo, Transport};
use crate::utils::error::ClientError;

/// 專案提供的序列產生器清單
#[derive(Debug, Clone, Default)]
pub struct SequenceCatalog {
    entries: Vec<SequenceInfo>,
}

impl SequenceCatalog {
    pub fn new(entries: Vec<SequenceInfo>) -> Self {
        Self { entries }
    }

    pub async fn fetch(transport: &dyn Transport, sequence_url: &str) -> Result<Self> {
        let body = transport.get(sequence_url).await?;
        let entries: Vec<SequenceInfo> = serde_json::from_str(&body)?;
        tracing::info!("📚 Project offers {} sequence generators", entries.len());
        Ok(Self { entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&SequenceInfo> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ClientError::GeneratorMissing {
                name: name.to_string(),
                available: self.names(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn entries(&self) -> &[SequenceInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
