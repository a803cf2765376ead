//! Colaboradores concretos para `feature-core`:
//! - `HookRegistry` (HookGateway basado en closures)
//! - `ListenerDispatcher` (NotificationGateway con listeners en orden)
//! - `ScenarioExecutor` (paso base que ejecuta un closure por escenario)
pub mod executor;
pub mod hooks;
pub mod listeners;
mod panic;

pub use executor::ScenarioExecutor;
pub use hooks::{HookRegistry, RegisteredHook};
pub use listeners::ListenerDispatcher;
