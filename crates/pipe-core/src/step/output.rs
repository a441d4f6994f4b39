//! Descomposición de tipos de retorno en valores "carry" y slots de error.
//!
//! Reglas:
//! - `()` no produce nada (típico de un sink).
//! - `Result<T, E>`: los slots de `T` seguidos de un slot de error al final.
//!   `Ok` equivale al error vacío; `Err` detiene el pipeline.
//! - Tuplas: un valor carry por elemento.
//! - Primitivos, `String`, colecciones de `std`, punteros (`Box`, `Rc`,
//!   `Arc`), `PathBuf`, `Duration`... son un único valor carry.
//! - Tipos propios se declaran con `carry!`. Para tipos ajenos que no estén
//!   en la lista (p.ej. de otro crate) basta devolver una tupla de un
//!   elemento: `|x: i32| (Foreign::new(x),)`.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use super::definition::ReturnSlot;
use crate::errors::BoxError;
use crate::value::{TypeDescriptor, Value};

/// Valor de retorno concreto de una llamada.
#[derive(Debug)]
pub enum Returned {
    Carry(Value),
    /// `None` es el centinela de error vacío.
    Error(Option<BoxError>),
}

/// Tipo de retorno admitido por el adaptador de closures.
pub trait StepOutput: 'static {
    /// Slots declarados, en orden.
    fn slots() -> Vec<ReturnSlot>;

    fn into_returned(self) -> Vec<Returned>;
}

impl StepOutput for () {
    fn slots() -> Vec<ReturnSlot> {
        Vec::new()
    }

    fn into_returned(self) -> Vec<Returned> {
        Vec::new()
    }
}

impl<T, E> StepOutput for Result<T, E>
    where T: StepOutput,
          E: Into<BoxError> + 'static
{
    fn slots() -> Vec<ReturnSlot> {
        let mut slots = T::slots();
        slots.push(ReturnSlot::error(TypeDescriptor::of::<E>()));
        slots
    }

    fn into_returned(self) -> Vec<Returned> {
        match self {
            Ok(value) => {
                let mut out = value.into_returned();
                out.push(Returned::Error(None));
                out
            }
            Err(e) => vec![Returned::Error(Some(e.into()))],
        }
    }
}

macro_rules! impl_tuple_output {
    ($($ty:ident),+) => {
        impl<$($ty: Any),+> StepOutput for ($($ty,)+) {
            fn slots() -> Vec<ReturnSlot> {
                vec![$(ReturnSlot::carry(TypeDescriptor::of::<$ty>())),+]
            }

            #[allow(non_snake_case)]
            fn into_returned(self) -> Vec<Returned> {
                let ($($ty,)+) = self;
                vec![$(Returned::Carry(Value::new($ty))),+]
            }
        }
    };
}

impl_tuple_output!(A);
impl_tuple_output!(A, B);
impl_tuple_output!(A, B, C);
impl_tuple_output!(A, B, C, D);
impl_tuple_output!(A, B, C, D, E);
impl_tuple_output!(A, B, C, D, E, F);

macro_rules! impl_generic_carry {
    ($([$($gen:tt)*] $ty:ty;)+) => {
        $(
            impl<$($gen)*> StepOutput for $ty {
                fn slots() -> Vec<ReturnSlot> {
                    vec![ReturnSlot::carry(TypeDescriptor::of::<Self>())]
                }

                fn into_returned(self) -> Vec<Returned> {
                    vec![Returned::Carry(Value::new(self))]
                }
            }
        )+
    };
}

impl_generic_carry! {
    [T: Any] Vec<T>;
    [T: Any] VecDeque<T>;
    [T: Any] Option<T>;
    [T: ?Sized + 'static] Box<T>;
    [T: ?Sized + 'static] Rc<T>;
    [T: ?Sized + 'static] Arc<T>;
    [K: Any, V: Any, S: Any] HashMap<K, V, S>;
    [T: Any, S: Any] HashSet<T, S>;
    [K: Any, V: Any] BTreeMap<K, V>;
    [T: Any] BTreeSet<T>;
}

crate::carry!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
              &'static str, PathBuf, OsString, Duration, Instant, SystemTime);
