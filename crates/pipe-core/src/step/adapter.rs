//! Adaptador: cualquier `Fn(A1..An) -> R` con `R: StepOutput` es un `Callable`.
//!
//! Los argumentos llegan como `Value`; el adaptador valida la aridad y hace
//! `downcast` de cada uno. Un desajuste se reporta como `InvocationFault`
//! sin llegar a llamar a la función.

use std::any::{type_name, Any};
use std::marker::PhantomData;

use super::definition::{Callable, Signature};
use super::output::{Returned, StepOutput};
use crate::errors::InvocationFault;
use crate::value::{TypeDescriptor, Value};

/// Closure envuelta junto con su firma.
///
/// `Args` es la tupla de parámetros; sólo existe para distinguir las
/// implementaciones por aridad.
pub struct FnStep<F, Args> {
    func: F,
    signature: Signature,
    _args: PhantomData<fn(Args)>,
}

/// Conversión de una closure en un paso del pipeline.
pub trait IntoCallable<Args> {
    fn into_callable(self) -> Box<dyn Callable>;
}

impl IntoCallable<Box<dyn Callable>> for Box<dyn Callable> {
    fn into_callable(self) -> Box<dyn Callable> {
        self
    }
}

/// Cursor sobre los argumentos de una llamada.
struct Arguments {
    values: std::vec::IntoIter<Value>,
    taken: usize,
    expected: usize,
}

impl Arguments {
    fn new(values: Vec<Value>, expected: usize) -> Result<Self, InvocationFault> {
        if values.len() != expected {
            return Err(InvocationFault::ArityMismatch { expected,
                                                        got: values.len() });
        }
        Ok(Self { values: values.into_iter(),
                  taken: 0,
                  expected })
    }

    fn next<T: Any>(&mut self) -> Result<T, InvocationFault> {
        self.taken += 1;
        let value = self.values
                        .next()
                        .ok_or(InvocationFault::ArityMismatch { expected: self.expected,
                                                                got: self.taken - 1 })?;
        value.downcast::<T>()
             .map_err(|v| InvocationFault::TypeMismatch { position: self.taken,
                                                          expected: type_name::<T>(),
                                                          found: v.type_name() })
    }
}

macro_rules! impl_fn_step {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> Callable for FnStep<F, ($($arg,)*)>
            where F: Fn($($arg),*) -> R + Send + Sync + 'static,
                  R: StepOutput,
                  $($arg: Any),*
        {
            fn name(&self) -> &str {
                type_name::<F>()
            }

            fn signature(&self) -> &Signature {
                &self.signature
            }

            #[allow(non_snake_case, unused_mut, unused_variables)]
            fn call(&self, args: Vec<Value>) -> Result<Vec<Returned>, InvocationFault> {
                let mut args = Arguments::new(args, self.signature.arity())?;
                $(let $arg = args.next::<$arg>()?;)*
                Ok((self.func)($($arg),*).into_returned())
            }
        }

        impl<F, R, $($arg),*> IntoCallable<($($arg,)*)> for F
            where F: Fn($($arg),*) -> R + Send + Sync + 'static,
                  R: StepOutput,
                  $($arg: Any),*
        {
            fn into_callable(self) -> Box<dyn Callable> {
                let signature = Signature::new(vec![$(TypeDescriptor::of::<$arg>()),*], R::slots());
                Box::new(FnStep::<F, ($($arg,)*)> { func: self,
                                                    signature,
                                                    _args: PhantomData })
            }
        }
    };
}

impl_fn_step!();
impl_fn_step!(A1);
impl_fn_step!(A1, A2);
impl_fn_step!(A1, A2, A3);
impl_fn_step!(A1, A2, A3, A4);
impl_fn_step!(A1, A2, A3, A4, A5);
impl_fn_step!(A1, A2, A3, A4, A5, A6);
impl_fn_step!(A1, A2, A3, A4, A5, A6, A7);
impl_fn_step!(A1, A2, A3, A4, A5, A6, A7, A8);
