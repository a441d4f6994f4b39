//! Composición "quick & dirty": funciona para dos funciones, pero el manejo de
//! errores crece con cada paso añadido.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("x should not be negative")]
pub struct NegativeInput;

pub fn power_plus_one_direct(x: i64) -> i64 {
    let sqr = |x: i64| x.saturating_mul(x);
    let inc = |x: i64| x.saturating_add(1);
    inc(sqr(x))
}

pub fn power_plus_one_handling_error(x: i64) -> Result<i64, NegativeInput> {
    let sqr = |x: i64| {
        if x < 0 {
            return Err(NegativeInput);
        }
        Ok(x.saturating_mul(x))
    };
    let inc = |x: i64| x.saturating_add(1);
    let y = sqr(x)?;
    Ok(inc(y))
}
