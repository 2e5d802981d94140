use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

/// 測試用傳輸層：依 (method, url) 回傳預設內容並記錄呼叫順序
#[derive(Default)]
pub struct RecordingTransport {
    routes: HashMap<(&'static str, String), String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: &'static str, url: &str, response: serde_json::Value) -> Self {
        self.routes
            .insert((method, url.to_string()), response.to_string());
        self
    }

    pub fn raw_route(mut self, method: &'static str, url: &str, response: &str) -> Self {
        self.routes
            .insert((method, url.to_string()), response.to_string());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, url: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == method && c.url == url)
            .count()
    }

    fn respond(&self, method: &'static str, url: &str, body: Option<serde_json::Value>) -> String {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            body,
        });
        self.routes
            .get(&(method, url.to_string()))
            .cloned()
            .unwrap_or_else(|| panic!("unexpected {} {}", method, url))
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<String> {
        Ok(self.respond("GET", url, None))
    }

    async fn post(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        Ok(self.respond("POST", url, Some(body.clone())))
    }
}
