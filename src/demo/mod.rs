//! Llamadores de ejemplo del engine.
//!
//! - `quick`: composición escrita a mano, sin pipeline.
//! - `piped`: la misma composición usando `pipe_core`.

pub mod piped;
pub mod quick;

pub use piped::{power_plus_one, power_plus_one_batch, power_plus_one_pipeline};
pub use quick::{power_plus_one_direct, power_plus_one_handling_error, NegativeInput};

/// Entrada negativa derivada de `x`, usada para mostrar un reporte de error.
pub fn failing_input(x: i64) -> i64 {
    x.saturating_abs().saturating_neg().saturating_sub(1)
}
