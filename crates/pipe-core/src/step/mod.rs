//! Definiciones relacionadas a pasos (callables).
//!
//! Un paso es una función con aridad y tipos fijos que sólo se conocen al
//! construir el pipeline. Este módulo define:
//! - `Callable`: interfaz neutral usada por el engine.
//! - `Signature` / `ReturnSlot`: descriptores introspectables.
//! - `StepOutput` y `Returned`: cómo un tipo de retorno Rust se descompone en
//!   valores "carry" y slots de error.
//! - `FnStep` / `IntoCallable`: adaptador de closures a `Callable`.

mod adapter;
pub mod definition;
pub mod output;

pub use adapter::{FnStep, IntoCallable};
pub use definition::{Callable, ReturnSlot, Signature};
pub use output::{Returned, StepOutput};
