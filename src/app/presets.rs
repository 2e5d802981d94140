use crate::domain::model::SequenceSyntax;
use crate::domain::scenario::{RangeTemplate, Scenario, StepDefinition};
use crate::utils::error::{ClientError, Result};

pub const DEFAULT_PRESET: &str = "arithmetic-smoothed";

pub const PRESET_NAMES: &[&str] = &["arithmetic-smoothed", "geometric", "smoothed-geometric"];

pub fn preset(name: &str) -> Result<Scenario> {
    match name {
        "arithmetic-smoothed" => Ok(arithmetic_smoothed()),
        "geometric" => Ok(geometric()),
        "smoothed-geometric" => Ok(smoothed_geometric()),
        _ => Err(ClientError::UnknownScenario {
            name: name.to_string(),
        }),
    }
}

/// 兩次固定範圍的 Arithmetic，再兩次以 Arithmetic 為基底的 Smoothed
pub fn arithmetic_smoothed() -> Scenario {
    Scenario {
        name: "arithmetic-smoothed".to_string(),
        description: Some("Arithmetic twice, then Smoothed over a nested Arithmetic".to_string()),
        project: "Lucija & Lev".to_string(),
        require_generators: vec![],
        steps: vec![
            StepDefinition {
                generator: "Arithmetic".to_string(),
                repeat: 2,
                range: RangeTemplate::Fixed {
                    from: 0,
                    to: 10,
                    step: 2,
                },
                parameters: vec![1.0, 3.0],
                sequences: vec![],
            },
            StepDefinition {
                generator: "Smoothed".to_string(),
                repeat: 2,
                range: RangeTemplate::Window {
                    window: 10,
                    step: 1,
                },
                parameters: vec![],
                sequences: vec![SequenceSyntax::new("Arithmetic", vec![1.0, 0.9])],
            },
        ],
    }
}

pub fn geometric() -> Scenario {
    Scenario {
        name: "geometric".to_string(),
        description: Some("Ten consecutive windows of a Geometric sequence".to_string()),
        project: "Matija & Filip".to_string(),
        require_generators: vec!["Geometric".to_string()],
        steps: vec![StepDefinition {
            generator: "Geometric".to_string(),
            repeat: 10,
            range: RangeTemplate::Window {
                window: 10,
                step: 1,
            },
            parameters: vec![1.0, 0.5],
            sequences: vec![],
        }],
    }
}

pub fn smoothed_geometric() -> Scenario {
    Scenario {
        name: "smoothed-geometric".to_string(),
        description: Some("Smoothed over a nested Geometric sequence".to_string()),
        project: "Lucija & Lev".to_string(),
        require_generators: vec![],
        steps: vec![StepDefinition {
            generator: "Smoothed".to_string(),
            repeat: 3,
            range: RangeTemplate::Window {
                window: 20,
                step: 2,
            },
            parameters: vec![],
            sequences: vec![SequenceSyntax::new("Geometric", vec![1.0, 0.9])],
        }],
    }
}
