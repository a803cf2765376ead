//! Configuración del runner.
//! Carga variables de entorno (.env) una sola vez y expone `RunnerConfig`.
//!
//! Claves:
//! - `FEATUREFLOW_PARALLEL`: ejecuta las features de la suite con rayon.
//! - `FEATUREFLOW_DRY_RUN`: fuerza `skip=true` en todas las features.
//!
//! Valores no reconocidos caen al default (`false`).

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const PARALLEL_KEY: &str = "FEATUREFLOW_PARALLEL";
pub const DRY_RUN_KEY: &str = "FEATUREFLOW_DRY_RUN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunnerConfig {
    pub parallel: bool,
    pub dry_run: bool,
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración desde una fuente arbitraria de claves.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let flag = |key: &str| lookup(key).and_then(|v| parse_flag(&v)).unwrap_or(false);
        Self { parallel: flag(PARALLEL_KEY),
               dry_run: flag(DRY_RUN_KEY) }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
