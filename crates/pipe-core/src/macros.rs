//! Macros utilitarias para construir pipelines con poco boilerplate.
//!
//! Exportadas en la raíz del crate:
//!   use pipe_core::{args, carry, pipe};

/// Declara tipos propios como valores "carry" (un único valor reenviado).
///
/// Sólo vale para tipos del crate que invoca la macro (regla de huérfanos).
/// Los tipos de `std` más comunes ya vienen implementados; para cualquier
/// otro tipo ajeno se devuelve una tupla de un elemento: `(valor,)`.
///
/// ```ignore
/// struct Celsius(f64);
/// pipe_core::carry!(Celsius);
/// let p = pipe_core::pipe![|c: Celsius| c.0 * 1.8 + 32.0, |f: f64| println!("{f}")];
/// ```
#[macro_export]
macro_rules! carry {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::step::StepOutput for $ty {
                fn slots() -> ::std::vec::Vec<$crate::step::ReturnSlot> {
                    ::std::vec![$crate::step::ReturnSlot::carry($crate::value::TypeDescriptor::of::<$ty>())]
                }

                fn into_returned(self) -> ::std::vec::Vec<$crate::step::Returned> {
                    ::std::vec![$crate::step::Returned::Carry($crate::value::Value::new(self))]
                }
            }
        )+
    };
}

/// Construye un `Pipeline` a partir de cero o más closures.
///
/// Forma: `pipe![f, g, h]` equivale a
/// `Pipeline::builder().then(f).then(g).then(h).build()`.
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::pipeline::Pipeline::empty()
    };
    ($($step:expr),+ $(,)?) => {
        $crate::pipeline::Pipeline::builder()
            $(.then($step))+
            .build()
    };
}

/// Lista de argumentos iniciales heterogénea: `args![5, "x", vec![1u8]]`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::new($arg)),+]
    };
}
