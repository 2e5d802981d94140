use serde::{Deserialize, Serialize};

/// 註冊中心回傳的專案描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub ip: String,
    pub port: u16,
}

impl Project {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }

    pub fn sequence_url(&self) -> String {
        format!("{}/sequence", self.base_url())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub from: u64,
    pub to: u64,
    pub step: u64,
}

/// 巢狀的序列引用，可再包含其他序列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceSyntax {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<f64>,
    #[serde(default)]
    pub sequences: Vec<SequenceSyntax>,
}

impl SequenceSyntax {
    pub fn new(name: impl Into<String>, parameters: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            parameters,
            sequences: Vec::new(),
        }
    }

    pub fn with_sequences(mut self, sequences: Vec<SequenceSyntax>) -> Self {
        self.sequences = sequences;
        self
    }

    /// 巢狀深度，葉節點為 1
    pub fn depth(&self) -> usize {
        1 + self.sequences.iter().map(|s| s.depth()).max().unwrap_or(0)
    }
}

/// `POST /sequence/<Generator>` 的請求內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRequest {
    pub range: Range,
    pub parameters: Vec<f64>,
    pub sequences: Vec<SequenceSyntax>,
}

/// `GET /sequence` 列出的產生器
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequences: Option<u32>,
}
