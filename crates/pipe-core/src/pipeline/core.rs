//! Core Pipeline implementation

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{debug, trace, warn};
use uuid::Uuid;

use super::PipelineBuilder;
use crate::errors::{InvocationFault, PipelineError};
use crate::ordinal::Ordinal;
use crate::step::{Callable, Returned, Signature};
use crate::value::{IntoArgs, Value};

/// Composición invocable de una secuencia ordenada de pasos.
///
/// Inmutable tras construirse. Clonar comparte la misma lista de pasos, y
/// la misma instancia puede invocarse desde varios hilos a la vez: cada
/// invocación sólo usa su propia lista de valores carry. El `id` sólo sirve
/// para correlacionar logs.
#[derive(Clone)]
pub struct Pipeline {
    id: Uuid,
    steps: Arc<[Box<dyn Callable>]>,
}

impl Pipeline {
    pub fn new(steps: Vec<Box<dyn Callable>>) -> Self {
        Self { id: Uuid::new_v4(),
               steps: Arc::from(steps) }
    }

    /// Pipeline trivial: acepta cualquier argumento y nunca falla.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.steps.iter().map(|s| s.signature())
    }

    /// Ejecuta el pipeline con los argumentos iniciales.
    ///
    /// # Ejemplo
    /// ```ignore
    /// let pipeline = pipe![|x: i32| x * x, |x: i32| x + 1];
    /// pipeline.invoke((5,))?;
    /// ```
    pub fn invoke<A: IntoArgs>(&self, args: A) -> Result<(), PipelineError> {
        self.invoke_values(args.into_args())
    }

    /// Ejecuta cada paso en orden, reenviando los valores no-error.
    ///
    /// Siempre retorna: el primer error no vacío o fallo de invocación
    /// termina la ejecución. Los pasos previos no se compensan.
    pub fn invoke_values(&self, args: Vec<Value>) -> Result<(), PipelineError> {
        debug!("invoke:start pipeline={} steps={} args={}", self.id, self.steps.len(), args.len());
        let mut carry = args;

        for (index, step) in self.steps.iter().enumerate() {
            let ordinal = Ordinal::from_index(index);
            trace!("invoke:step pipeline={} step={} name={} args={}", self.id, ordinal, step.name(), carry.len());

            let returned = match call_guarded(&**step, std::mem::take(&mut carry)) {
                Ok(returned) => returned,
                Err(fault) => {
                    warn!("invoke:fault pipeline={} step={} fault={}", self.id, ordinal, fault);
                    return Err(PipelineError::Fault { ordinal, fault });
                }
            };

            let mut outputs = returned.into_iter();
            while let Some(out) = outputs.next() {
                match out {
                    Returned::Carry(value) => carry.push(value),
                    Returned::Error(None) => {}
                    Returned::Error(Some(source)) => {
                        debug!("invoke:failed pipeline={} step={} err={}", self.id, ordinal, source);
                        // El error de dominio prevalece sobre un pánico al liberar.
                        if let Err(fault) = drop_guarded((carry, outputs)) {
                            warn!("invoke:drop-fault pipeline={} step={} fault={}", self.id, ordinal, fault);
                        }
                        return Err(PipelineError::StepFailed { ordinal, source });
                    }
                }
            }
        }

        debug!("invoke:done pipeline={} leftover={}", self.id, carry.len());
        if let Err(fault) = drop_guarded(carry) {
            warn!("invoke:drop-fault pipeline={} fault={}", self.id, fault);
            // Sin pasos no hay a quién atribuir el fallo: el pipeline vacío nunca falla.
            if let Some(last) = self.steps.len().checked_sub(1) {
                return Err(PipelineError::Fault { ordinal: Ordinal::from_index(last),
                                                  fault });
            }
        }
        Ok(())
    }
}

/// Libera valores carry sobrantes interceptando pánicos en `Drop`.
fn drop_guarded<T>(values: T) -> Result<(), InvocationFault> {
    panic::catch_unwind(AssertUnwindSafe(move || drop(values))).map_err(InvocationFault::from_panic)
}

/// Llama al paso interceptando cualquier pánico.
fn call_guarded(step: &dyn Callable, args: Vec<Value>) -> Result<Vec<Returned>, InvocationFault> {
    match panic::catch_unwind(AssertUnwindSafe(|| step.call(args))) {
        Ok(result) => result,
        Err(payload) => Err(InvocationFault::from_panic(payload)),
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
         .field("id", &self.id)
         .field("steps", &self.steps.iter().map(|s| s.name()).collect::<Vec<_>>())
         .finish()
    }
}
