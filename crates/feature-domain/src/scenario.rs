use serde::{Deserialize, Serialize};

use crate::{DomainError, ResultCode};

/// Nodo de escenario dentro de una feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    title: String,
    line: u32,
    tags: Vec<String>,
}

impl Scenario {
    pub fn new(title: &str, line: u32) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("scenario title must not be empty".to_string()));
        }
        Ok(Scenario { title: title.to_string(), line, tags: Vec::new() })
    }
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
    pub fn title(&self) -> &str { &self.title }
    pub fn line(&self) -> u32 { self.line }
    pub fn tags(&self) -> &[String] { &self.tags }
}

/// Resultado de un escenario tal como lo produce el paso de ejecución base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub title: String,
    pub line: u32,
    pub code: ResultCode,
    pub message: Option<String>,
}

impl ScenarioResult {
    pub fn new(scenario: &Scenario, code: ResultCode, message: Option<String>) -> Self {
        ScenarioResult { title: scenario.title().to_string(),
                         line: scenario.line(),
                         code,
                         message }
    }
    pub fn passed(scenario: &Scenario) -> Self { Self::new(scenario, ResultCode::Passed, None) }
    pub fn skipped(scenario: &Scenario) -> Self { Self::new(scenario, ResultCode::Skipped, None) }
    pub fn failed(scenario: &Scenario, message: impl Into<String>) -> Self {
        Self::new(scenario, ResultCode::Failed, Some(message.into()))
    }
}
