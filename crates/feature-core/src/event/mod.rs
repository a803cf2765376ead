//! Eventos de ciclo de vida de una feature y un registrador en memoria.

mod recorder;
mod types;

pub use recorder::{InMemoryEventRecorder, RecordedEvent};
pub use types::{FeatureLifecycle, FeatureTested, ResultView, TestSubject};
