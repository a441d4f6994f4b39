//! Errores del engine.
//!
//! Dos familias, ambas terminales para la invocación en curso:
//! - error de dominio: un paso devolvió un error no vacío.
//! - fallo de invocación: aridad/tipos incompatibles o pánico dentro del paso.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ordinal::Ordinal;

/// Error devuelto por un paso (cualquier `E: Into<BoxError>`).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fallo al intentar llamar a un paso.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum InvocationFault {
    #[error("call with {got} arguments, expected {expected}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("call using {found} as type {expected} for argument {position}")]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("panicked: {message}")]
    Panicked { message: String },
}

impl InvocationFault {
    /// Convierte el payload de `catch_unwind` en un fallo legible.
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::Panicked { message }
    }
}

/// Error terminal de una invocación del pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{ordinal} func failed: {source}")]
    StepFailed { ordinal: Ordinal, source: BoxError },
    #[error("{ordinal} func aborted: {fault}")]
    Fault {
        ordinal: Ordinal,
        #[source]
        fault: InvocationFault,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Domain,
    Fault,
}

/// Resumen serializable de un `PipelineError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub position: usize,
    pub kind: FailureKind,
    pub message: String,
}

impl FailureReport {
    pub fn to_json(&self) -> serde_json::Value {
        // Sólo campos primitivos: la serialización no puede fallar.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl PipelineError {
    pub fn ordinal(&self) -> Ordinal {
        match self {
            Self::StepFailed { ordinal, .. } | Self::Fault { ordinal, .. } => *ordinal,
        }
    }

    /// Posición 1-based del paso que falló.
    pub fn position(&self) -> usize {
        self.ordinal().position()
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::StepFailed { .. } => FailureKind::Domain,
            Self::Fault { .. } => FailureKind::Fault,
        }
    }

    /// Error original devuelto por el paso (sólo para errores de dominio).
    pub fn domain_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::StepFailed { source, .. } => Some(source.as_ref()),
            Self::Fault { .. } => None,
        }
    }

    pub fn fault(&self) -> Option<&InvocationFault> {
        match self {
            Self::Fault { fault, .. } => Some(fault),
            Self::StepFailed { .. } => None,
        }
    }

    pub fn report(&self) -> FailureReport {
        FailureReport { position: self.position(),
                        kind: self.kind(),
                        message: self.to_string() }
    }
}
