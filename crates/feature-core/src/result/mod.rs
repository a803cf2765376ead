//! Resultados de feature: `TestResult` (paso base) y `HookedTestResult`
//! (decorado con los outcomes de hooks).
//!
//! Invariante: los escenarios de un `HookedTestResult` son exactamente los del
//! `TestResult` del que se compuso, mismo orden y mismos valores.

use feature_domain::{ResultCode, ScenarioResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::call::CallOutcomeSet;
use crate::hashing::hash_value;

/// Resultado producido por el paso de ejecución base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    scenarios: Vec<ScenarioResult>,
}

impl TestResult {
    pub fn new(scenarios: Vec<ScenarioResult>) -> Self { Self { scenarios } }

    pub fn scenarios(&self) -> &[ScenarioResult] { &self.scenarios }

    /// Código máximo de los escenarios (`Passed` si no hay escenarios).
    pub fn result_code(&self) -> ResultCode { ResultCode::max_of(self.scenarios.iter().map(|s| s.code)) }

    pub fn is_passed(&self) -> bool { self.result_code() < ResultCode::Failed }

    /// Fingerprint de la secuencia de escenarios.
    pub fn fingerprint(&self) -> String { scenarios_fingerprint(&self.scenarios) }
}

/// `TestResult` + outcomes de todos los hooks de la feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookedTestResult {
    scenarios: Vec<ScenarioResult>,
    hook_outcomes: CallOutcomeSet,
}

impl HookedTestResult {
    /// Copia los escenarios de `base` tal cual y adjunta `hook_outcomes`.
    pub fn compose(base: &TestResult, hook_outcomes: CallOutcomeSet) -> Self {
        Self { scenarios: base.scenarios.clone(),
               hook_outcomes }
    }

    pub fn scenarios(&self) -> &[ScenarioResult] { &self.scenarios }

    pub fn hook_outcomes(&self) -> &CallOutcomeSet { &self.hook_outcomes }

    /// Cualquier fallo de hook marca la feature como `Failed`, sin importar
    /// lo que digan los escenarios.
    pub fn result_code(&self) -> ResultCode {
        if self.hook_outcomes.has_failures() {
            return ResultCode::Failed;
        }
        ResultCode::max_of(self.scenarios.iter().map(|s| s.code))
    }

    pub fn is_passed(&self) -> bool { self.result_code() < ResultCode::Failed }

    /// Mismo fingerprint que el `TestResult` de origen: los outcomes no entran.
    pub fn fingerprint(&self) -> String { scenarios_fingerprint(&self.scenarios) }
}

fn scenarios_fingerprint(scenarios: &[ScenarioResult]) -> String {
    let items: Vec<Value> = scenarios.iter()
                                     .map(|s| {
                                         json!({
                                             "title": s.title,
                                             "line": s.line,
                                             "code": s.code.code(),
                                             "message": s.message,
                                         })
                                     })
                                     .collect();
    hash_value(&Value::Array(items))
}
