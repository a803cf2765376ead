//! featureflow
//!
//! Este crate actúa como la aplicación de ejemplo:
//! - `config`: configuración del runner desde el entorno.
//! - `demo`: suite de ejemplo cableada con los adapters.
//! - `errors`: errores de aplicación.

pub mod config;
pub mod demo;
pub mod errors;
