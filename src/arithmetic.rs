//! The four basic calculator operations.

use tracing::trace;

use crate::error::MathError;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`, rejecting a zero divisor.
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        trace!(a, "rejected division by zero");
        Err(MathError::DivisionByZero)
    } else {
        Ok(a / b)
    }
}
