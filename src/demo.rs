//! Suite de demostración: tres features, hooks globales y por tag, y un
//! listener de progreso además del registrador en memoria.

use feature_adapters::{HookRegistry, ListenerDispatcher, ScenarioExecutor};
use feature_core::{FeatureLifecycle, HookableFeatureTester, InMemoryEventRecorder, SuiteReport, SuiteTester};
use feature_domain::{Environment, Feature, Scenario, Suite};
use log::info;
use serde_json::json;
use std::sync::Arc;

use crate::config::RunnerConfig;
use crate::errors::AppError;

pub fn demo_features() -> Result<Vec<Feature>, AppError> {
    Ok(vec![
        Feature::new("Checkout",
                     vec![Scenario::new("add item to cart", 3)?, Scenario::new("pay with card", 9)?])?
            .with_file("features/checkout.feature"),
        Feature::new("Inventory", vec![Scenario::new("restock item", 4)?])?
            .with_file("features/inventory.feature")
            .with_tags(&["db"]),
        Feature::new("Reports", vec![Scenario::new("daily totals", 5)?, Scenario::new("export csv", 12)?])?
            .with_file("features/reports.feature"),
    ])
}

fn demo_executor() -> ScenarioExecutor {
    let mut exec = ScenarioExecutor::new();
    exec.define("add item to cart", |_, _| Ok(()))
        .define("pay with card", |_, _| Ok(()))
        .define("restock item", |_, _| Ok(()))
        .define("daily totals", |_, _| Ok(()));
    // "export csv" queda sin definición -> Undefined
    exec
}

fn demo_hooks() -> HookRegistry {
    let mut hooks = HookRegistry::new();
    hooks.before_feature("BeforeFeature announce", |payload| Ok(Some(format!("starting {}", payload.feature().title()))))
         .register(FeatureLifecycle::Before,
                   "BeforeFeature @db connect",
                   Some("db"),
                   |_| Err("database unavailable".to_string()))
         .after_feature("AfterFeature cleanup", |_| Ok(None));
    hooks
}

/// Ejecuta la suite de demostración y devuelve el reporte junto con el
/// registrador de eventos.
pub fn run_demo(config: &RunnerConfig) -> Result<(SuiteReport, Arc<InMemoryEventRecorder>), AppError> {
    let suite = Suite::new("demo", json!({"paths": ["features"]}))?;
    let environment = Environment::for_suite(&suite, vec!["FeatureContext".to_string()]);
    let features = demo_features()?;

    let recorder = Arc::new(InMemoryEventRecorder::new());
    let mut listeners = ListenerDispatcher::new();
    listeners.attach("recorder", recorder.clone())
             .subscribe(FeatureLifecycle::After, "progress", |payload| {
                 if let Some(result) = payload.result() {
                     println!("  {} -> {}", payload.feature().title(), result.result_code());
                 }
                 Ok(())
             });

    let tester = HookableFeatureTester::new(demo_executor()).with_hook_gateway(Arc::new(demo_hooks()))
                                                             .with_notification_gateway(Arc::new(listeners));
    let runner = SuiteTester::new(tester);

    info!("running suite `{}` (parallel={}, dry_run={})", suite.name(), config.parallel, config.dry_run);
    let report = if config.parallel {
        runner.run_parallel(&suite, &environment, &features, config.dry_run)?
    } else {
        runner.run(&suite, &environment, &features, config.dry_run)?
    };
    Ok((report, recorder))
}
