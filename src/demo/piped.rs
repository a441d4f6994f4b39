//! `power_plus_one` compuesto con `pipe_core`.
//!
//! El último paso es un sink: guarda el resultado y no reenvía nada.

use std::sync::{Arc, Mutex};

use log::info;
use pipe_core::{pipe, Pipeline, PipelineError};
use rayon::prelude::*;

use super::quick::NegativeInput;

/// Pipeline `[x*x (falla si x < 0), x+1, sink]` escribiendo en `result`.
pub fn power_plus_one_pipeline(result: Arc<Mutex<i64>>) -> Pipeline {
    pipe![
          // power
          |x: i64| -> Result<i64, NegativeInput> {
              if x < 0 {
                  return Err(NegativeInput);
              }
              Ok(x.saturating_mul(x))
          },
          // plus one
          |x: i64| x.saturating_add(1),
          move |x: i64| {
              if let Ok(mut slot) = result.lock() {
                  *slot = x;
              }
          }]
}

pub fn power_plus_one(x: i64) -> Result<i64, PipelineError> {
    let result = Arc::new(Mutex::new(0));
    power_plus_one_pipeline(result.clone()).invoke((x,))?;
    let value = *result.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    Ok(value)
}

/// Una sola instancia de pipeline invocada en paralelo sobre un lote.
///
/// El índice de cada entrada viaja como segundo valor carry hasta el sink,
/// que escribe en el slot correspondiente.
pub fn power_plus_one_batch(inputs: &[i64]) -> Vec<Result<i64, PipelineError>> {
    let results: Arc<Vec<Mutex<i64>>> = Arc::new(inputs.iter().map(|_| Mutex::new(0)).collect());
    let sink = results.clone();
    let pipeline = pipe![|x: i64, slot: usize| -> Result<(i64, usize), NegativeInput> {
                             if x < 0 {
                                 return Err(NegativeInput);
                             }
                             Ok((x.saturating_mul(x), slot))
                         },
                         |x: i64, slot: usize| (x.saturating_add(1), slot),
                         move |x: i64, slot: usize| {
                             if let Some(Ok(mut cell)) = sink.get(slot).map(|m| m.lock()) {
                                 *cell = x;
                             }
                         }];
    info!("batch: {} inputs through pipeline {}", inputs.len(), pipeline.id());

    inputs.par_iter()
          .enumerate()
          .map(|(slot, &x)| {
              pipeline.invoke((x, slot))?;
              Ok(*results[slot].lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
          })
          .collect()
}
