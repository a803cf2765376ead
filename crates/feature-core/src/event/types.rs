//! Tipos de evento de ciclo de vida y payload `FeatureTested`.
//!
//! Rol en el flujo:
//! - Cada etapa del `HookableFeatureTester` construye un payload nuevo; nunca
//!   se reutiliza ni se muta entre etapas.
//! - Los campos ausentes se modelan con `None`, nunca con un set vacío: un
//!   `CallOutcomeSet` vacío es un valor legítimo distinto de "no aplica".
use feature_domain::{Environment, Feature, ResultCode, ScenarioResult, Suite};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::call::CallOutcomeSet;
use crate::result::{HookedTestResult, TestResult};

/// Punto del ciclo de vida de una feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureLifecycle {
    Before,
    After,
}

impl FeatureLifecycle {
    /// Nombre estable del evento (contrato con listeners externos).
    pub fn name(&self) -> &'static str {
        match self {
            FeatureLifecycle::Before => "tester.feature_tested.before",
            FeatureLifecycle::After => "tester.feature_tested.after",
        }
    }
}

impl fmt::Display for FeatureLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Triple (suite, environment, feature) que se reenvía sin inspeccionar.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TestSubject<'a> {
    pub suite: &'a Suite,
    pub environment: &'a Environment,
    pub feature: &'a Feature,
}

impl<'a> TestSubject<'a> {
    pub fn new(suite: &'a Suite, environment: &'a Environment, feature: &'a Feature) -> Self {
        Self { suite, environment, feature }
    }
}

/// Resultado adjunto a un payload: el del paso base (hooks AFTER) o el
/// compuesto (notificación AFTER).
#[derive(Debug, Clone, Copy, Serialize)]
pub enum ResultView<'a> {
    Plain(&'a TestResult),
    Hooked(&'a HookedTestResult),
}

impl<'a> ResultView<'a> {
    pub fn scenarios(&self) -> &'a [ScenarioResult] {
        match *self {
            ResultView::Plain(r) => r.scenarios(),
            ResultView::Hooked(r) => r.scenarios(),
        }
    }

    pub fn result_code(&self) -> ResultCode {
        match self {
            ResultView::Plain(r) => r.result_code(),
            ResultView::Hooked(r) => r.result_code(),
        }
    }

    pub fn fingerprint(&self) -> String {
        match self {
            ResultView::Plain(r) => r.fingerprint(),
            ResultView::Hooked(r) => r.fingerprint(),
        }
    }
}

/// Payload de ciclo de vida de una feature.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureTested<'a> {
    subject: TestSubject<'a>,
    result: Option<ResultView<'a>>,
    outcomes: Option<&'a CallOutcomeSet>,
}

impl<'a> FeatureTested<'a> {
    /// Payload para hooks BEFORE: sólo el sujeto.
    pub fn before_hooks(subject: TestSubject<'a>) -> Self {
        Self { subject, result: None, outcomes: None }
    }

    /// Payload para hooks AFTER: sujeto + resultado del paso base.
    pub fn after_hooks(subject: TestSubject<'a>, result: &'a TestResult) -> Self {
        Self { subject,
               result: Some(ResultView::Plain(result)),
               outcomes: None }
    }

    /// Payload para la notificación BEFORE: sujeto + outcomes de hooks BEFORE.
    pub fn before_notice(subject: TestSubject<'a>, outcomes: &'a CallOutcomeSet) -> Self {
        Self { subject,
               result: None,
               outcomes: Some(outcomes) }
    }

    /// Payload para la notificación AFTER: sujeto + resultado compuesto +
    /// outcomes de hooks AFTER (sólo los de esta etapa).
    pub fn after_notice(subject: TestSubject<'a>, result: &'a HookedTestResult, outcomes: &'a CallOutcomeSet) -> Self {
        Self { subject,
               result: Some(ResultView::Hooked(result)),
               outcomes: Some(outcomes) }
    }

    pub fn subject(&self) -> TestSubject<'a> { self.subject }
    pub fn suite(&self) -> &'a Suite { self.subject.suite }
    pub fn environment(&self) -> &'a Environment { self.subject.environment }
    pub fn feature(&self) -> &'a Feature { self.subject.feature }
    pub fn result(&self) -> Option<ResultView<'a>> { self.result }
    pub fn outcomes(&self) -> Option<&'a CallOutcomeSet> { self.outcomes }
}
