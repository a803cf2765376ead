//! feature-core: decorador de hooks BEFORE/AFTER alrededor de la ejecución de
//! una feature.
//!
//! El crate no ejecuta escenarios por sí mismo: delega en un `FeatureTester`
//! base y se limita a secuenciar hooks, notificaciones y la decisión de skip,
//! componiendo un `HookedTestResult` sin tocar los datos de escenario.
pub mod call;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod result;
pub mod tester;

pub use call::{CallOutcome, CallOutcomeSet, CapturedError};
pub use errors::{FeatureTesterError, ListenerError};
pub use event::{FeatureLifecycle, FeatureTested, InMemoryEventRecorder, RecordedEvent, ResultView, TestSubject};
pub use result::{HookedTestResult, TestResult};
pub use tester::{FeatureReport, FeatureTester, HookGateway, HookableFeatureTester, NotificationGateway, SuiteReport,
                 SuiteTester};

pub use feature_domain::{Environment, Feature, ResultCode, Scenario, ScenarioResult, Suite};
