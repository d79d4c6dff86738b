//! The reference calculator: a direct transcription of the recurrence
//! F(n) = F(n-1) + F(n-2). Runs in O(2^n) time and O(n) stack; there is
//! deliberately no memo table.

use crate::error::{validate_index, FibonacciError};

/// Returns the `n`-th Fibonacci number by naive double recursion.
///
/// Fails with [`FibonacciError::InvalidArgument`] when `n` is negative or
/// larger than [`common::constants::MAX_INDEX`].
///
/// ```
/// assert_eq!(fib_core::compute(10), Ok(55));
/// assert!(fib_core::compute(-1).is_err());
/// ```
#[tracing::instrument(level = "debug")]
pub fn compute(n: i64) -> Result<u64, FibonacciError> {
    let n = validate_index(n)?;
    let value = fib_rec(n);
    tracing::debug!(value, "computed");
    Ok(value)
}

fn fib_rec(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fib_rec(n - 1) + fib_rec(n - 2)
    }
}
