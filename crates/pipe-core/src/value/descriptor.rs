use std::any::{Any, TypeId};
use std::fmt;

use serde::Serialize;

/// Descriptor de tipo de un parámetro o slot de retorno.
///
/// Sólo el nombre se serializa; `TypeId` no es estable entre compilaciones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    #[serde(skip)]
    pub id: TypeId,
    pub name: &'static str,
}

impl TypeDescriptor {
    pub fn of<T: Any>() -> Self {
        Self { id: TypeId::of::<T>(),
               name: std::any::type_name::<T>() }
    }

    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
