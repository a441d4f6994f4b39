//! Conversión de la lista inicial de argumentos de un pipeline.

use std::any::Any;

use super::Value;

/// Convierte argumentos iniciales en la lista "carry" del engine.
///
/// Implementado para `Vec<Value>` (ver macro `args!`), `()` y tuplas de hasta
/// 8 elementos: `pipeline.invoke((5,))`, `pipeline.invoke((2, "x"))`.
pub trait IntoArgs {
    fn into_args(self) -> Vec<Value>;
}

impl IntoArgs for Vec<Value> {
    fn into_args(self) -> Vec<Value> {
        self
    }
}

impl IntoArgs for () {
    fn into_args(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! impl_into_args {
    ($($ty:ident),+) => {
        impl<$($ty: Any),+> IntoArgs for ($($ty,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Vec<Value> {
                let ($($ty,)+) = self;
                vec![$(Value::new($ty)),+]
            }
        }
    };
}

impl_into_args!(A);
impl_into_args!(A, B);
impl_into_args!(A, B, C);
impl_into_args!(A, B, C, D);
impl_into_args!(A, B, C, D, E);
impl_into_args!(A, B, C, D, E, F);
impl_into_args!(A, B, C, D, E, F, G);
impl_into_args!(A, B, C, D, E, F, G, H);
