//! Errores del core.
//!
//! Los fallos de hooks NO aparecen aquí: son datos (`CallOutcome::Failure`).
//! Sólo los defectos de listeners escapan de `HookableFeatureTester::run`.

use thiserror::Error;

use crate::event::FeatureLifecycle;

/// Error devuelto por un listener durante una notificación.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("listener `{listener}` failed: {message}")]
pub struct ListenerError {
    pub listener: String,
    pub message: String,
}

impl ListenerError {
    pub fn new(listener: impl Into<String>, message: impl Into<String>) -> Self {
        Self { listener: listener.into(),
               message: message.into() }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FeatureTesterError {
    #[error("notification for {event} failed")]
    Notification {
        event: FeatureLifecycle,
        #[source]
        source: ListenerError,
    },
}
