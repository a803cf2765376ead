use feature_core::{FeatureLifecycle, FeatureTested, ListenerError, NotificationGateway};
use indexmap::IndexMap;
use log::debug;
use std::sync::Arc;

type ListenerFn = dyn Fn(&FeatureTested<'_>) -> Result<(), String> + Send + Sync;

struct Subscription {
    name: String,
    callee: Box<ListenerFn>,
}

/// Listeners por evento, notificados en orden de suscripción.
///
/// El primer listener que falla corta el despacho; su error se devuelve
/// tal cual (no se captura).
#[derive(Default)]
pub struct ListenerDispatcher {
    listeners: IndexMap<FeatureLifecycle, Vec<Subscription>>,
}

impl ListenerDispatcher {
    pub fn new() -> Self { Self::default() }

    pub fn subscribe<F>(&mut self, event: FeatureLifecycle, name: &str, callee: F) -> &mut Self
        where F: Fn(&FeatureTested<'_>) -> Result<(), String> + Send + Sync + 'static
    {
        self.listeners.entry(event).or_default().push(Subscription { name: name.to_string(),
                                                                     callee: Box::new(callee) });
        self
    }

    /// Suscribe otro gateway (p.ej. un `InMemoryEventRecorder`) a ambos eventos.
    pub fn attach(&mut self, name: &str, gateway: Arc<dyn NotificationGateway>) -> &mut Self {
        for event in [FeatureLifecycle::Before, FeatureLifecycle::After] {
            let target = gateway.clone();
            self.subscribe(event, name, move |payload| target.notify(event, payload).map_err(|e| e.message));
        }
        self
    }

    pub fn listener_count(&self, event: FeatureLifecycle) -> usize { self.listeners.get(&event).map_or(0, Vec::len) }
}

impl NotificationGateway for ListenerDispatcher {
    fn notify(&self, event: FeatureLifecycle, payload: &FeatureTested<'_>) -> Result<(), ListenerError> {
        let Some(subscriptions) = self.listeners.get(&event) else {
            return Ok(());
        };
        for sub in subscriptions {
            debug!("{}: notifying `{}`", event, sub.name);
            (sub.callee)(payload).map_err(|message| ListenerError::new(&sub.name, message))?;
        }
        Ok(())
    }
}
