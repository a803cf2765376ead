//! Despacho de notificaciones a listeners.

mod dispatcher;

pub use dispatcher::ListenerDispatcher;
