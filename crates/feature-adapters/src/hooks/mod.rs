//! Registro de hooks de feature.

mod registry;

pub use registry::{HookRegistry, RegisteredHook};
