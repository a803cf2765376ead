//! Colaboradores del tester y orquestación de hooks.
//!
//! - `FeatureTester`: paso de ejecución base (ejecuta los escenarios).
//! - `HookGateway`: ejecuta hooks de un evento; nunca falla.
//! - `NotificationGateway`: notifica listeners; sus fallos se propagan.
//! - `HookableFeatureTester`: decora un `FeatureTester` con hooks y eventos.
//! - `SuiteTester`: ejecuta varias features de una suite.

mod hookable;
mod suite;

pub use hookable::HookableFeatureTester;
pub use suite::{FeatureReport, SuiteReport, SuiteTester};

use feature_domain::{Environment, Feature, Suite};
use std::sync::Arc;

use crate::call::CallOutcomeSet;
use crate::errors::ListenerError;
use crate::event::{FeatureLifecycle, FeatureTested};
use crate::result::TestResult;

/// Paso de ejecución base.
///
/// Debe respetar `skip` (sin efectos reales sobre escenarios) y no debe
/// fallar: cualquier error interno queda codificado en el `TestResult`.
pub trait FeatureTester: Send + Sync {
    fn test(&self, suite: &Suite, environment: &Environment, feature: &Feature, skip: bool) -> TestResult;
}

/// Ejecuta los hooks registrados para `event`, en orden de registro.
///
/// Cada fallo de hook debe capturarse como `CallOutcome::Failure`.
pub trait HookGateway: Send + Sync {
    fn dispatch_event_hooks(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> CallOutcomeSet;
}

/// Notifica sincrónicamente a los listeners de `event`.
pub trait NotificationGateway: Send + Sync {
    fn notify(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> Result<(), ListenerError>;
}

impl<T: FeatureTester + ?Sized> FeatureTester for Arc<T> {
    fn test(&self, suite: &Suite, environment: &Environment, feature: &Feature, skip: bool) -> TestResult {
        (**self).test(suite, environment, feature, skip)
    }
}

impl<T: HookGateway + ?Sized> HookGateway for Arc<T> {
    fn dispatch_event_hooks(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> CallOutcomeSet {
        (**self).dispatch_event_hooks(event, payload)
    }
}

impl<T: NotificationGateway + ?Sized> NotificationGateway for Arc<T> {
    fn notify(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> Result<(), ListenerError> {
        (**self).notify(event, payload)
    }
}
