//! Valores dinámicos que circulan entre pasos.
//!
//! - `TypeDescriptor`: identidad de tipo en runtime (TypeId + nombre).
//! - `Value`: valor "carry" con el tipo borrado, producido por un paso y
//!   consumido por el siguiente.
//! - `IntoArgs`: conversión de la lista inicial de argumentos.

mod args;
mod descriptor;

pub use args::IntoArgs;
pub use descriptor::TypeDescriptor;

use std::any::Any;
use std::fmt;

/// Valor con tipo borrado que recuerda su descriptor.
///
/// El engine nunca interpreta el contenido; sólo lo mueve de un paso al
/// siguiente. El adaptador de cada paso es quien hace el `downcast`.
pub struct Value {
    inner: Box<dyn Any>,
    ty: TypeDescriptor,
}

impl Value {
    pub fn new<T: Any>(value: T) -> Self {
        Self { inner: Box::new(value),
               ty: TypeDescriptor::of::<T>() }
    }

    pub fn descriptor(&self) -> TypeDescriptor {
        self.ty
    }

    pub fn type_name(&self) -> &'static str {
        self.ty.name
    }

    pub fn is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Recupera el valor concreto. Si el tipo no coincide devuelve el
    /// `Value` intacto para que el llamador pueda reportar el tipo real.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        let Value { inner, ty } = self;
        match inner.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(inner) => Err(Value { inner, ty }),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
         .field("type", &self.ty.name)
         .finish_non_exhaustive()
    }
}
