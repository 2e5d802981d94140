use crate::utils::error::Result;
use async_trait::async_trait;

/// HTTP 傳輸層介面，回傳原始回應文字，解碼交給呼叫端
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<String>;
}
