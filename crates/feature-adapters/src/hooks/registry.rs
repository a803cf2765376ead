//! `HookRegistry`: hooks BEFORE/AFTER registrados como closures.
//!
//! Un hook devuelve `Ok(Some(stdout))`/`Ok(None)` o `Err(mensaje)`. Tanto los
//! `Err` como los panics se capturan como `CallOutcome::Failure`; el registro
//! nunca falla hacia el caller.

use feature_core::{CallOutcome, CallOutcomeSet, CapturedError, FeatureLifecycle, FeatureTested, HookGateway};
use indexmap::IndexMap;
use log::{trace, warn};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::panic::panic_message;

type HookFn = dyn Fn(&FeatureTested<'_>) -> Result<Option<String>, String> + Send + Sync;

/// Hook registrado: descripción, filtro de tag opcional y callee.
pub struct RegisteredHook {
    description: String,
    tag_filter: Option<String>,
    callee: Box<HookFn>,
}

impl RegisteredHook {
    pub fn description(&self) -> &str { &self.description }

    pub fn tag_filter(&self) -> Option<&str> { self.tag_filter.as_deref() }

    /// Sin filtro aplica a todas las features; con filtro sólo a las que
    /// llevan el tag.
    fn applies_to(&self, payload: &FeatureTested<'_>) -> bool {
        match &self.tag_filter {
            Some(tag) => payload.feature().has_tag(tag),
            None => true,
        }
    }

    fn call(&self, payload: &FeatureTested<'_>) -> CallOutcome {
        match catch_unwind(AssertUnwindSafe(|| (self.callee)(payload))) {
            Ok(Ok(Some(stdout))) => CallOutcome::success(&self.description).with_stdout(stdout),
            Ok(Ok(None)) => CallOutcome::success(&self.description),
            Ok(Err(message)) => CallOutcome::failure(&self.description, CapturedError::new(message)),
            Err(payload) => CallOutcome::failure(&self.description, CapturedError::new(panic_message(payload))),
        }
    }
}

#[derive(Default)]
pub struct HookRegistry {
    hooks: IndexMap<FeatureLifecycle, Vec<RegisteredHook>>,
}

impl HookRegistry {
    pub fn new() -> Self { Self::default() }

    /// Registra un hook para `event`. El orden de registro es el orden de
    /// ejecución.
    pub fn register<F>(&mut self, event: FeatureLifecycle, description: &str, tag_filter: Option<&str>, callee: F) -> &mut Self
        where F: Fn(&FeatureTested<'_>) -> Result<Option<String>, String> + Send + Sync + 'static
    {
        self.hooks.entry(event).or_default().push(RegisteredHook { description: description.to_string(),
                                                                   tag_filter: tag_filter.map(str::to_string),
                                                                   callee: Box::new(callee) });
        self
    }

    pub fn before_feature<F>(&mut self, description: &str, callee: F) -> &mut Self
        where F: Fn(&FeatureTested<'_>) -> Result<Option<String>, String> + Send + Sync + 'static
    {
        self.register(FeatureLifecycle::Before, description, None, callee)
    }

    pub fn after_feature<F>(&mut self, description: &str, callee: F) -> &mut Self
        where F: Fn(&FeatureTested<'_>) -> Result<Option<String>, String> + Send + Sync + 'static
    {
        self.register(FeatureLifecycle::After, description, None, callee)
    }

    pub fn hooks_for(&self, event: FeatureLifecycle) -> &[RegisteredHook] {
        self.hooks.get(&event).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl HookGateway for HookRegistry {
    fn dispatch_event_hooks(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> CallOutcomeSet {
        let mut outcomes = CallOutcomeSet::new();
        for hook in self.hooks_for(event).iter().filter(|h| h.applies_to(payload)) {
            trace!("{}: calling hook `{}`", event, hook.description());
            let outcome = hook.call(payload);
            if let Some(error) = outcome.error() {
                warn!("{}: hook `{}` failed: {}", event, hook.description(), error);
            }
            outcomes.push(outcome);
        }
        outcomes
    }
}
