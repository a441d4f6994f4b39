//! pipe-core: composición de funciones con tipos borrados.
//!
//! Dada una secuencia ordenada de closures con firmas heterogéneas, construye
//! un único `Pipeline` que las invoca en orden, reenviando los valores no-error
//! de cada paso como argumentos del siguiente. El primer error no vacío corta
//! la ejecución; cualquier fallo de invocación (aridad, tipos, pánico) se
//! convierte en un `PipelineError` en lugar de abortar el proceso.
//!
//! ```ignore
//! use pipe_core::pipe;
//!
//! let pipeline = pipe![
//!     |x: i64| -> Result<i64, &'static str> {
//!         if x < 0 { Err("x should not be negative") } else { Ok(x * x) }
//!     },
//!     |x: i64| x + 1,
//!     |x: i64| println!("{x}"),
//! ];
//! pipeline.invoke((5_i64,))?;
//! ```

pub mod errors;
mod macros;
pub mod ordinal;
pub mod pipeline;
pub mod step;
pub mod value;

pub use errors::{BoxError, FailureKind, FailureReport, InvocationFault, PipelineError};
pub use ordinal::{ordinal, Ordinal};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use step::{Callable, FnStep, IntoCallable, ReturnSlot, Returned, Signature, StepOutput};
pub use value::{IntoArgs, TypeDescriptor, Value};

/// Construye un pipeline a partir de pasos ya convertidos a `Callable`.
pub fn build(steps: Vec<Box<dyn Callable>>) -> Pipeline {
    Pipeline::new(steps)
}
