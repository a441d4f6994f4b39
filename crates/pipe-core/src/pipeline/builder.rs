//! Builder para `Pipeline`.
//!
//! No valida compatibilidad entre pasos consecutivos: los tipos sólo se
//! contrastan al invocar. Construir es barato: sólo acumula la lista.

use super::Pipeline;
use crate::step::{Callable, IntoCallable};

#[derive(Default)]
pub struct PipelineBuilder {
    steps: Vec<Box<dyn Callable>>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade una closure (o fn item) como siguiente paso.
    #[inline]
    pub fn then<F, Args>(mut self, step: F) -> Self
        where F: IntoCallable<Args>
    {
        self.steps.push(step.into_callable());
        self
    }

    /// Añade un paso que implementa `Callable` a mano.
    #[inline]
    pub fn then_callable(mut self, step: Box<dyn Callable>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn build(self) -> Pipeline {
        Pipeline::new(self.steps)
    }
}

impl std::fmt::Debug for PipelineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineBuilder")
         .field("steps", &self.len())
         .finish()
    }
}
