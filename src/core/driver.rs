use crate::core::{Result, SequenceRequest, Transport};
use crate::domain::scenario::PlannedRequest;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// 單筆產生器回應
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorResponse {
    pub generator: String,
    pub iteration: usize,
    pub request: SequenceRequest,
    pub body: serde_json::Value,
}

/// 依序送出計畫中的請求，每筆回應解碼後寫一行到輸出
pub struct RequestDriver {
    transport: Arc<dyn Transport>,
}

impl RequestDriver {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn execute(
        &self,
        sequence_url: &str,
        plan: &[PlannedRequest],
        out: &mut (dyn Write + Send),
    ) -> Result<Vec<GeneratorResponse>> {
        let mut responses = Vec::with_capacity(plan.len());

        for (index, planned) in plan.iter().enumerate() {
            let url = format!("{}/{}", sequence_url, planned.generator);
            tracing::debug!(
                "📡 Request {}/{}: {} (iteration {})",
                index + 1,
                plan.len(),
                planned.generator,
                planned.iteration
            );

            let payload = serde_json::to_value(&planned.body)?;
            let text = self.transport.post(&url, &payload).await?;
            let body: serde_json::Value = serde_json::from_str(&text)?;

            writeln!(out, "{}", body)?;

            responses.push(GeneratorResponse {
                generator: planned.generator.clone(),
                iteration: planned.iteration,
                request: planned.body.clone(),
                body,
            });
        }

        Ok(responses)
    }
}
