//! Pipeline Rust Library
//!
//! Este crate agrupa los llamadores de ejemplo del engine `pipe-core`:
//! - Expone `config` para leer la configuración de la demo (.env / entorno).
//! - Expone `demo` con la composición a mano y la versión con pipeline.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod demo;

pub use pipe_core;
