//! `ScenarioExecutor`: paso de ejecución base basado en closures.
//!
//! Cada escenario se resuelve por título. Con `skip` no se invoca ningún
//! closure y todos los escenarios salen `Skipped`. Los errores (incluidos los
//! panics) quedan codificados en el `TestResult`; nunca se propagan.

use feature_core::{FeatureTester, TestResult};
use feature_domain::{Environment, Feature, ResultCode, Scenario, ScenarioResult, Suite};
use indexmap::IndexMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::panic::panic_message;

type ScenarioFn = dyn Fn(&Environment, &Scenario) -> Result<(), String> + Send + Sync;

#[derive(Default)]
pub struct ScenarioExecutor {
    definitions: IndexMap<String, Box<ScenarioFn>>,
}

impl ScenarioExecutor {
    pub fn new() -> Self { Self::default() }

    /// Define (o reemplaza) la implementación del escenario `title`.
    pub fn define<F>(&mut self, title: &str, body: F) -> &mut Self
        where F: Fn(&Environment, &Scenario) -> Result<(), String> + Send + Sync + 'static
    {
        self.definitions.insert(title.to_string(), Box::new(body));
        self
    }

    fn run_scenario(&self, environment: &Environment, scenario: &Scenario) -> ScenarioResult {
        let Some(body) = self.definitions.get(scenario.title()) else {
            return ScenarioResult::new(scenario, ResultCode::Undefined, Some("no definition found".to_string()));
        };
        match catch_unwind(AssertUnwindSafe(|| body(environment, scenario))) {
            Ok(Ok(())) => ScenarioResult::passed(scenario),
            Ok(Err(message)) => ScenarioResult::failed(scenario, message),
            Err(payload) => ScenarioResult::failed(scenario, panic_message(payload)),
        }
    }
}

impl FeatureTester for ScenarioExecutor {
    fn test(&self, _suite: &Suite, environment: &Environment, feature: &Feature, skip: bool) -> TestResult {
        let scenarios = feature.scenarios()
                               .iter()
                               .map(|s| if skip { ScenarioResult::skipped(s) } else { self.run_scenario(environment, s) })
                               .collect();
        TestResult::new(scenarios)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixture() -> (Suite, Environment, Feature) {
        let suite = Suite::new("s", serde_json::json!({})).unwrap();
        let env = Environment::for_suite(&suite, vec![]);
        let feature = Feature::new("f",
                                   vec![Scenario::new("ok", 1).unwrap(),
                                        Scenario::new("bad", 2).unwrap(),
                                        Scenario::new("boom", 3).unwrap(),
                                        Scenario::new("missing", 4).unwrap()]).unwrap();
        (suite, env, feature)
    }

    #[test]
    fn failures_are_encoded_not_raised() {
        let (suite, env, feature) = fixture();
        let mut exec = ScenarioExecutor::new();
        exec.define("ok", |_, _| Ok(()))
            .define("bad", |_, _| Err("assertion failed".to_string()))
            .define("boom", |_, _| panic!("kaboom"));

        let result = exec.test(&suite, &env, &feature, false);
        let codes: Vec<ResultCode> = result.scenarios().iter().map(|s| s.code).collect();
        assert_eq!(codes, vec![ResultCode::Passed, ResultCode::Failed, ResultCode::Failed, ResultCode::Undefined]);
        assert_eq!(result.scenarios()[2].message.as_deref(), Some("panicked: kaboom"));
        assert_eq!(result.result_code(), ResultCode::Failed);
    }

    #[test]
    fn skip_never_calls_scenario_bodies() {
        let (suite, env, feature) = fixture();
        let calls = Arc::new(AtomicUsize::new(0));
        let mut exec = ScenarioExecutor::new();
        let counter = calls.clone();
        exec.define("ok", move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });

        let result = exec.test(&suite, &env, &feature, true);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(result.scenarios().iter().all(|s| s.code == ResultCode::Skipped));
    }
}
