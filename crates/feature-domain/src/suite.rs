use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Suite de features: nombre estable + settings libres (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    name: String,
    settings: serde_json::Value,
}

impl Suite {
    pub fn new(name: &str, settings: serde_json::Value) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("suite name must not be empty".to_string()));
        }
        Ok(Suite { name: name.to_string(),
                   settings })
    }
    pub fn name(&self) -> &str { &self.name }
    pub fn settings(&self) -> &serde_json::Value { &self.settings }
}

/// Entorno de ejecución asociado a una suite (contextos cargados).
///
/// Cada entorno tiene un `id` propio; dos entornos de la misma suite no se
/// consideran iguales aunque carguen los mismos contextos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    id: Uuid,
    suite_name: String,
    contexts: Vec<String>,
}

impl Environment {
    pub fn for_suite(suite: &Suite, contexts: Vec<String>) -> Self {
        Environment { id: Uuid::new_v4(),
                      suite_name: suite.name().to_string(),
                      contexts }
    }
    pub fn id(&self) -> Uuid { self.id }
    pub fn suite_name(&self) -> &str { &self.suite_name }
    pub fn contexts(&self) -> &[String] { &self.contexts }
}
