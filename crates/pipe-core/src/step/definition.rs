use serde::Serialize;

use super::output::Returned;
use crate::errors::InvocationFault;
use crate::value::{TypeDescriptor, Value};

/// Slot de retorno declarado por un paso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReturnSlot {
    pub ty: TypeDescriptor,
    /// El slot tiene la capacidad "error": nunca se reenvía como valor.
    pub is_error: bool,
}

impl ReturnSlot {
    pub fn carry(ty: TypeDescriptor) -> Self {
        Self { ty, is_error: false }
    }

    pub fn error(ty: TypeDescriptor) -> Self {
        Self { ty, is_error: true }
    }
}

/// Firma introspectable de un paso.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub params: Vec<TypeDescriptor>,
    pub returns: Vec<ReturnSlot>,
}

impl Signature {
    pub fn new(params: Vec<TypeDescriptor>, returns: Vec<ReturnSlot>) -> Self {
        Self { params, returns }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Tipos que el paso reenvía al siguiente.
    pub fn carried(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.returns.iter().filter(|s| !s.is_error).map(|s| &s.ty)
    }

    /// Un sink no reenvía valores (a lo sumo devuelve un error).
    pub fn is_sink(&self) -> bool {
        self.returns.iter().all(|s| s.is_error)
    }
}

/// Interfaz neutral de un paso. El engine sólo conoce este trait.
///
/// Contrato de `call`:
/// - `args` llega en el orden de `signature().params`.
/// - Aridad o tipos incompatibles se reportan como `InvocationFault`; un
///   pánico dentro del paso lo intercepta el pipeline.
/// - Los `Returned` se devuelven en el orden declarado en
///   `signature().returns`; tras un error no vacío pueden omitirse los
///   valores restantes.
pub trait Callable: Send + Sync {
    /// Nombre para logs. Por defecto genérico.
    fn name(&self) -> &str {
        "callable"
    }

    fn signature(&self) -> &Signature;

    fn call(&self, args: Vec<Value>) -> Result<Vec<Returned>, InvocationFault>;
}
