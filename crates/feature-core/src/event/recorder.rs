use chrono::{DateTime, Utc};
use feature_domain::ResultCode;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use super::{FeatureLifecycle, FeatureTested};
use crate::call::CallOutcomeSet;
use crate::errors::ListenerError;
use crate::tester::NotificationGateway;

/// Snapshot owned de una notificación recibida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub seq: u64, // orden de llegada
    pub event: FeatureLifecycle,
    pub environment_id: Uuid,
    pub feature_title: String,
    pub result_code: Option<ResultCode>,
    pub fingerprint: Option<String>,
    pub outcomes: Option<CallOutcomeSet>,
    pub ts: DateTime<Utc>, // metadato, no participa en comparaciones de tests
}

/// Listener append-only en memoria. Nunca falla.
#[derive(Debug, Default)]
pub struct InMemoryEventRecorder {
    inner: Mutex<Vec<RecordedEvent>>,
}

impl InMemoryEventRecorder {
    pub fn new() -> Self { Self::default() }

    /// Eventos registrados en orden ascendente por `seq`.
    pub fn list(&self) -> Vec<RecordedEvent> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    pub fn list_for(&self, event: FeatureLifecycle) -> Vec<RecordedEvent> {
        self.list().into_iter().filter(|e| e.event == event).collect()
    }
}

impl NotificationGateway for InMemoryEventRecorder {
    fn notify(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> Result<(), ListenerError> {
        let mut events = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let seq = events.len() as u64;
        let result = payload.result();
        events.push(RecordedEvent { seq,
                                    event,
                                    environment_id: payload.environment().id(),
                                    feature_title: payload.feature().title().to_string(),
                                    result_code: result.map(|r| r.result_code()),
                                    fingerprint: result.map(|r| r.fingerprint()),
                                    outcomes: payload.outcomes().cloned(),
                                    ts: Utc::now() });
        Ok(())
    }
}
