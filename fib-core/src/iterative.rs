//! Optimized variant: linear time, constant stack. Not the default
//! calculator; the page and `compute` keep the recursive form.

use crate::error::{validate_index, FibonacciError};

/// Returns the `n`-th Fibonacci number with a bottom-up loop.
///
/// Accepts exactly the same indices as [`crate::compute`] and fails the same
/// way outside them.
#[tracing::instrument(level = "debug")]
pub fn compute_iterative(n: i64) -> Result<u64, FibonacciError> {
    let n = validate_index(n)?;
    if n == 0 {
        return Ok(0);
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    // Stops at F(n); F(n + 1) may not fit when n == MAX_INDEX.
    for _ in 1..n {
        (prev, curr) = (curr, prev + curr);
    }
    tracing::debug!(value = curr, "computed");
    Ok(curr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recursive::compute;
    use common::constants::MAX_INDEX;

    #[test]
    fn agrees_with_recursive() {
        for n in 0..=25 {
            assert_eq!(compute_iterative(n), compute(n), "n = {n}");
        }
    }

    #[test]
    fn largest_index() {
        assert_eq!(compute_iterative(MAX_INDEX), Ok(12_200_160_415_121_876_738));
        assert_eq!(compute_iterative(92), Ok(7_540_113_804_746_346_429));
    }

    #[test]
    fn same_errors_as_recursive() {
        assert_eq!(compute_iterative(-5), compute(-5));
        assert_eq!(compute_iterative(MAX_INDEX + 1), compute(MAX_INDEX + 1));
    }
}
