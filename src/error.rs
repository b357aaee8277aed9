use thiserror::Error;

/// Failure kinds for the fallible operations in this crate.
///
/// Only [`divide`](crate::arithmetic::divide) and
/// [`factorial`](crate::discrete::factorial) can fail; every other function
/// is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Division by zero")]
    DivisionByZero,

    /// An input violated a function's precondition.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// The result does not fit in the return type.
    #[error("factorial of {0} does not fit in a u64")]
    Overflow(i64),
}
