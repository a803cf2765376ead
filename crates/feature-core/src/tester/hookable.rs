//! `HookableFeatureTester`: tester de features que despacha hooks y eventos
//! BEFORE/AFTER alrededor del paso base.
//!
//! Secuencia (lineal, sin retrocesos):
//! 1. hooks BEFORE (sólo si `skip == false` y hay `HookGateway`)
//! 2. notificación BEFORE (si hay `NotificationGateway`, independiente de skip)
//! 3. `skip = skip || before.has_failures()` (se congela aquí)
//! 4. paso base con el skip efectivo
//! 5. hooks AFTER (sólo si el skip efectivo es `false` y hay `HookGateway`)
//! 6. composición `HookedTestResult(escenarios, merge(before, after))`
//! 7. notificación AFTER con los outcomes AFTER únicamente
//!
//! Los fallos de hooks son datos; sólo un fallo de listener sale como `Err`.

use feature_domain::{Environment, Feature, Suite};
use log::{debug, warn};
use std::sync::Arc;

use super::{FeatureTester, HookGateway, NotificationGateway};
use crate::call::CallOutcomeSet;
use crate::errors::FeatureTesterError;
use crate::event::{FeatureLifecycle, FeatureTested, TestSubject};
use crate::result::{HookedTestResult, TestResult};

pub struct HookableFeatureTester<T: FeatureTester> {
    base: T,
    hook_gateway: Option<Arc<dyn HookGateway>>,
    notification_gateway: Option<Arc<dyn NotificationGateway>>,
}

impl<T: FeatureTester> HookableFeatureTester<T> {
    /// Tester sin colaboradores: equivale al paso base envuelto en un
    /// `HookedTestResult` con outcomes vacíos.
    pub fn new(base: T) -> Self {
        Self { base,
               hook_gateway: None,
               notification_gateway: None }
    }

    pub fn with_hook_gateway(mut self, gateway: Arc<dyn HookGateway>) -> Self {
        self.hook_gateway = Some(gateway);
        self
    }

    pub fn with_notification_gateway(mut self, gateway: Arc<dyn NotificationGateway>) -> Self {
        self.notification_gateway = Some(gateway);
        self
    }

    /// Fija el despachador de hooks.
    pub fn set_hook_gateway(&mut self, gateway: Arc<dyn HookGateway>) { self.hook_gateway = Some(gateway); }

    /// Fija el despachador de eventos.
    pub fn set_notification_gateway(&mut self, gateway: Arc<dyn NotificationGateway>) {
        self.notification_gateway = Some(gateway);
    }

    pub fn base(&self) -> &T { &self.base }

    /// Ejecuta una feature con hooks y eventos BEFORE/AFTER.
    ///
    /// Devuelve `Err` únicamente si un listener falla en alguna notificación;
    /// en ese caso las etapas posteriores no se ejecutan.
    pub fn run(&self,
               suite: &Suite,
               environment: &Environment,
               feature: &Feature,
               skip: bool)
               -> Result<HookedTestResult, FeatureTesterError> {
        let subject = TestSubject::new(suite, environment, feature);

        let before = self.dispatch_before_hooks(subject, skip);
        self.dispatch_before_event(subject, &before)?;

        let effective_skip = skip || before.has_failures();
        if effective_skip && !skip {
            warn!("feature `{}`: before hook failed, skipping scenarios", feature.title());
        }

        let result = self.base.test(suite, environment, feature, effective_skip);
        debug!("feature `{}`: base tester returned {} (skip={})", feature.title(), result.result_code(), effective_skip);

        let after = self.dispatch_after_hooks(subject, &result, effective_skip);
        let hooked = HookedTestResult::compose(&result, CallOutcomeSet::merge(&before, &after));

        self.dispatch_after_event(subject, &hooked, &after)?;
        Ok(hooked)
    }

    fn dispatch_before_hooks(&self, subject: TestSubject<'_>, skip: bool) -> CallOutcomeSet {
        match (&self.hook_gateway, skip) {
            (Some(hooks), false) => {
                let outcomes = hooks.dispatch_event_hooks(FeatureLifecycle::Before, &FeatureTested::before_hooks(subject));
                debug!("feature `{}`: {} before hook(s) dispatched", subject.feature.title(), outcomes.len());
                outcomes
            }
            _ => CallOutcomeSet::new(),
        }
    }

    fn dispatch_before_event(&self, subject: TestSubject<'_>, outcomes: &CallOutcomeSet) -> Result<(), FeatureTesterError> {
        let Some(events) = &self.notification_gateway else {
            return Ok(());
        };
        events.notify(FeatureLifecycle::Before, &FeatureTested::before_notice(subject, outcomes))
              .map_err(|source| FeatureTesterError::Notification { event: FeatureLifecycle::Before,
                                                                   source })
    }

    fn dispatch_after_hooks(&self, subject: TestSubject<'_>, result: &TestResult, skip: bool) -> CallOutcomeSet {
        match (&self.hook_gateway, skip) {
            (Some(hooks), false) => {
                let outcomes = hooks.dispatch_event_hooks(FeatureLifecycle::After, &FeatureTested::after_hooks(subject, result));
                debug!("feature `{}`: {} after hook(s) dispatched", subject.feature.title(), outcomes.len());
                outcomes
            }
            _ => CallOutcomeSet::new(),
        }
    }

    fn dispatch_after_event(&self,
                            subject: TestSubject<'_>,
                            result: &HookedTestResult,
                            outcomes: &CallOutcomeSet)
                            -> Result<(), FeatureTesterError> {
        let Some(events) = &self.notification_gateway else {
            return Ok(());
        };
        events.notify(FeatureLifecycle::After, &FeatureTested::after_notice(subject, result, outcomes))
              .map_err(|source| FeatureTesterError::Notification { event: FeatureLifecycle::After,
                                                                   source })
    }
}
