use crate::domain::model::{Range, SequenceRequest, SequenceSyntax};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

/// 一次執行的完整請求計畫：目標專案、必要產生器與各步驟
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub project: String,
    #[serde(default)]
    pub require_generators: Vec<String>,
    pub steps: Vec<StepDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub generator: String,
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    pub range: RangeTemplate,
    #[serde(default)]
    pub parameters: Vec<f64>,
    #[serde(default)]
    pub sequences: Vec<SequenceSyntax>,
}

fn default_repeat() -> usize {
    1
}

/// 範圍樣板：固定範圍，或依迭代序號 `i` 滑動的視窗 `[i*window, (i+1)*window]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeTemplate {
    Fixed { from: u64, to: u64, step: u64 },
    Window { window: u64, step: u64 },
}

impl RangeTemplate {
    pub fn for_iteration(&self, iteration: u64) -> Range {
        match *self {
            RangeTemplate::Fixed { from, to, step } => Range { from, to, step },
            RangeTemplate::Window { window, step } => Range {
                from: iteration.saturating_mul(window),
                to: iteration.saturating_add(1).saturating_mul(window),
                step,
            },
        }
    }

    fn step(&self) -> u64 {
        match *self {
            RangeTemplate::Fixed { step, .. } | RangeTemplate::Window { step, .. } => step,
        }
    }
}

/// 展開後的一筆請求
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRequest {
    pub generator: String,
    pub iteration: usize,
    pub body: SequenceRequest,
}

impl Scenario {
    /// 依宣告順序展開每個步驟，每步驟產生 `repeat` 筆請求
    pub fn plan(&self) -> Vec<PlannedRequest> {
        self.steps
            .iter()
            .flat_map(|step| {
                (0..step.repeat).map(move |iteration| PlannedRequest {
                    generator: step.generator.clone(),
                    iteration,
                    body: SequenceRequest {
                        range: step.range.for_iteration(iteration as u64),
                        parameters: step.parameters.clone(),
                        sequences: step.sequences.clone(),
                    },
                })
            })
            .collect()
    }

    pub fn total_requests(&self) -> usize {
        self.steps.iter().map(|s| s.repeat).sum()
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }
}

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scenario.name", &self.name)?;
        validate_non_empty_string("scenario.project", &self.project)?;

        for generator in &self.require_generators {
            validate_non_empty_string("scenario.require_generators", generator)?;
        }

        if self.steps.is_empty() {
            return Err(ClientError::InvalidConfigValueError {
                field: "scenario.steps".to_string(),
                value: "[]".to_string(),
                reason: "A scenario needs at least one step".to_string(),
            });
        }

        for (index, step) in self.steps.iter().enumerate() {
            validate_step(index, step)?;
        }

        Ok(())
    }
}

fn validate_step(index: usize, step: &StepDefinition) -> Result<()> {
    let field = |name: &str| format!("scenario.steps[{}].{}", index, name);

    validate_non_empty_string(&field("generator"), &step.generator)?;
    validate_positive_number(&field("repeat"), step.repeat as u64, 1)?;
    // step 為 0 時伺服器端的範圍迴圈不會結束
    validate_positive_number(&field("range.step"), step.range.step(), 1)?;

    match step.range {
        RangeTemplate::Fixed { from, to, .. } if from > to => {
            return Err(ClientError::InvalidConfigValueError {
                field: field("range"),
                value: format!("{}..{}", from, to),
                reason: "'from' must not be greater than 'to'".to_string(),
            });
        }
        RangeTemplate::Window { window, .. } => {
            validate_positive_number(&field("range.window"), window, 1)?;
            // 最後一個視窗的上界為 repeat * window，必須能以 u64 表示
            if (step.repeat as u64).checked_mul(window).is_none() {
                return Err(ClientError::InvalidConfigValueError {
                    field: field("range.window"),
                    value: window.to_string(),
                    reason: format!(
                        "{} windows of this size exceed the largest range bound",
                        step.repeat
                    ),
                });
            }
        }
        _ => {}
    }

    for (nested_index, nested) in step.sequences.iter().enumerate() {
        validate_syntax(&format!("{}[{}]", field("sequences"), nested_index), nested)?;
    }

    Ok(())
}

fn validate_syntax(field: &str, syntax: &SequenceSyntax) -> Result<()> {
    validate_non_empty_string(&format!("{}.name", field), &syntax.name)?;
    for (index, nested) in syntax.sequences.iter().enumerate() {
        validate_syntax(&format!("{}.sequences[{}]", field, index), nested)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_step(generator: &str, repeat: usize, window: u64) -> StepDefinition {
        StepDefinition {
            generator: generator.to_string(),
            repeat,
            range: RangeTemplate::Window { window, step: 1 },
            parameters: vec![1.0, 0.5],
            sequences: vec![],
        }
    }

    fn scenario(steps: Vec<StepDefinition>) -> Scenario {
        Scenario {
            name: "test".to_string(),
            description: None,
            project: "Lucija & Lev".to_string(),
            require_generators: vec![],
            steps,
        }
    }

    #[test]
    fn test_window_range_formula() {
        let plan = scenario(vec![window_step("Geometric", 10, 7)]).plan();

        assert_eq!(plan.len(), 10);
        for (i, request) in plan.iter().enumerate() {
            assert_eq!(request.iteration, i);
            assert_eq!(request.body.range.from, i as u64 * 7);
            assert_eq!(request.body.range.to, (i as u64 + 1) * 7);
            assert_eq!(request.body.range.step, 1);
        }
    }

    #[test]
    fn test_plan_keeps_step_order() {
        let fixed = StepDefinition {
            generator: "Arithmetic".to_string(),
            repeat: 2,
            range: RangeTemplate::Fixed {
                from: 0,
                to: 10,
                step: 2,
            },
            parameters: vec![1.0, 3.0],
            sequences: vec![],
        };
        let scenario = scenario(vec![fixed, window_step("Smoothed", 2, 10)]);
        let plan = scenario.plan();

        let generators: Vec<&str> = plan.iter().map(|p| p.generator.as_str()).collect();
        assert_eq!(generators, vec!["Arithmetic", "Arithmetic", "Smoothed", "Smoothed"]);
        assert_eq!(plan[1].body.range, Range { from: 0, to: 10, step: 2 });
        assert_eq!(plan[3].body.range, Range { from: 10, to: 20, step: 1 });
        assert_eq!(scenario.total_requests(), 4);
    }

    #[test]
    fn test_validation_rejects_zero_step_and_repeat() {
        let mut step = window_step("Geometric", 1, 10);
        step.range = RangeTemplate::Window { window: 10, step: 0 };
        assert!(scenario(vec![step]).validate().is_err());

        assert!(scenario(vec![window_step("Geometric", 0, 10)]).validate().is_err());
        assert!(scenario(vec![]).validate().is_err());
        assert!(scenario(vec![window_step("Geometric", 3, 10)]).validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_inverted_fixed_range() {
        let mut step = window_step("Arithmetic", 1, 1);
        step.range = RangeTemplate::Fixed {
            from: 10,
            to: 0,
            step: 1,
        };
        assert!(scenario(vec![step]).validate().is_err());
    }

    #[test]
    fn test_validation_rejects_overflowing_windows() {
        let huge = window_step("Geometric", 2, u64::MAX);
        match scenario(vec![huge]).validate() {
            Err(ClientError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "scenario.steps[0].range.window");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }

        // 單一視窗剛好到達上界仍可接受
        assert!(scenario(vec![window_step("Geometric", 1, u64::MAX)]).validate().is_ok());
    }

    #[test]
    fn test_nested_name_errors_carry_the_index_path() {
        let mut step = window_step("Smoothed", 1, 10);
        step.sequences = vec![
            SequenceSyntax::new("Arithmetic", vec![1.0, 0.9]),
            SequenceSyntax::new("Sum", vec![]).with_sequences(vec![
                SequenceSyntax::new("Geometric", vec![1.0, 0.5]),
                SequenceSyntax::new(" ", vec![]),
            ]),
        ];

        match scenario(vec![step]).validate() {
            Err(ClientError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "scenario.steps[0].sequences[1].sequences[1].name");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_range_template_deserializes_both_shapes() {
        let fixed: RangeTemplate =
            serde_json::from_str(r#"{"from": 0, "to": 10, "step": 2}"#).unwrap();
        assert_eq!(fixed, RangeTemplate::Fixed { from: 0, to: 10, step: 2 });

        let window: RangeTemplate = serde_json::from_str(r#"{"window": 10, "step": 1}"#).unwrap();
        assert_eq!(window, RangeTemplate::Window { window: 10, step: 1 });
    }
}
