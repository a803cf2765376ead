//! Escala de códigos de resultado compartida por escenarios, features y suites.
//!
//! El orden es significativo: el resultado agregado de un conjunto es siempre
//! el código máximo de sus miembros.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    Passed,
    Skipped,
    Pending,
    Undefined,
    Failed,
}

impl ResultCode {
    /// Valor numérico estable (usado por reporters y códigos de salida).
    pub fn code(&self) -> u8 {
        match self {
            ResultCode::Passed => 0,
            ResultCode::Skipped => 10,
            ResultCode::Pending => 20,
            ResultCode::Undefined => 30,
            ResultCode::Failed => 99,
        }
    }

    /// Agrega una secuencia de códigos; una secuencia vacía cuenta como `Passed`.
    pub fn max_of<I: IntoIterator<Item = ResultCode>>(codes: I) -> ResultCode {
        codes.into_iter().max().unwrap_or(ResultCode::Passed)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResultCode::Passed => "passed",
            ResultCode::Skipped => "skipped",
            ResultCode::Pending => "pending",
            ResultCode::Undefined => "undefined",
            ResultCode::Failed => "failed",
        };
        f.write_str(label)
    }
}
