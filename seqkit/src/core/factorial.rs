//! Factorial with an explicit 64-bit overflow boundary.

use crate::core::error::{Result, SeqError};

/// Largest `n` whose factorial fits in `u64` (`20! = 2_432_902_008_176_640_000`).
pub const FACTORIAL_MAX_N: i64 = 20;

/// Compute `n!`. Every `n <= 1`, including negatives, yields 1.
pub fn factorial(n: i64) -> Result<u64> {
    if n <= 1 {
        return Ok(1);
    }
    if n > FACTORIAL_MAX_N {
        return Err(SeqError::Overflow {
            operation: "factorial",
            input: n,
            max: FACTORIAL_MAX_N,
        });
    }
    Ok(n.unsigned_abs() * factorial(n - 1)?)
}
