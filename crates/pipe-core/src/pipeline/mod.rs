//! Construcción e invocación de pipelines.

mod builder;
mod core;

pub use self::builder::PipelineBuilder;
pub use self::core::Pipeline;
