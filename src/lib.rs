//! Small pure-function numeric library.
//!
//! Two groups of helpers, all stateless and side-effect free:
//! basic calculator arithmetic over `f64`, and integer helpers
//! (parity, sign, factorial) over `i64`. The two fallible
//! operations report through [`MathError`].

pub mod arithmetic;
pub mod discrete;
pub mod error;

pub use arithmetic::{add, divide, multiply, subtract};
pub use discrete::{factorial, is_even, is_positive};
pub use error::MathError;
