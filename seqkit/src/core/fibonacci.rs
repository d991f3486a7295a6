//! Fibonacci numbers, naive recursive and iterative.
//!
//! Both variants share the same domain: `n` is unsigned and results are
//! `u64`, so `n` may not exceed [`FIB_MAX_N`].

use crate::core::error::{Result, SeqError};

/// Largest `n` whose Fibonacci number fits in `u64` (`F(93) = 12_200_160_415_121_876_738`).
pub const FIB_MAX_N: u32 = 93;

/// Compute `F(n)` by direct recursion.
///
/// Exponential time. Callers must bound `n` themselves; anything past the
/// low 40s takes seconds to minutes. Use [`fibonacci_iterative`] otherwise.
pub fn fibonacci_recursive(n: u32) -> Result<u64> {
    check_bound("fibonacci_recursive", n)?;
    Ok(naive(n))
}

fn naive(n: u32) -> u64 {
    if n <= 1 {
        u64::from(n)
    } else {
        naive(n - 1) + naive(n - 2)
    }
}

/// Compute `F(n)` in O(n) time with two running accumulators.
pub fn fibonacci_iterative(n: u32) -> Result<u64> {
    check_bound("fibonacci_iterative", n)?;
    if n == 0 {
        return Ok(0);
    }
    // Stop one step short so `prev2` never holds F(n + 1), which overflows at n = 93.
    let (mut prev1, mut prev2) = (0u64, 1u64);
    for _ in 1..n {
        (prev1, prev2) = (prev2, prev1 + prev2);
    }
    Ok(prev2)
}

fn check_bound(operation: &'static str, n: u32) -> Result<()> {
    if n > FIB_MAX_N {
        return Err(SeqError::Overflow {
            operation,
            input: i64::from(n),
            max: i64::from(FIB_MAX_N),
        });
    }
    Ok(())
}
