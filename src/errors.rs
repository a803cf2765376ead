//! Errores de la aplicación (demo/CLI).

use feature_core::FeatureTesterError;
use feature_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Ejecución abortada: {0}")]
    Tester(#[from] FeatureTesterError),
}
