use common::constants::MAX_INDEX;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FibonacciError {
    pub(crate) fn negative(n: i64) -> Self {
        FibonacciError::InvalidArgument(format!("n must be non-negative, got {n}"))
    }

    pub(crate) fn out_of_range(n: i64) -> Self {
        FibonacciError::InvalidArgument(format!(
            "n must be at most {MAX_INDEX} for the result to fit in a u64, got {n}"
        ))
    }
}

/// Checks `n` against `0..=MAX_INDEX` and returns it as an unsigned index.
pub(crate) fn validate_index(n: i64) -> Result<u64, FibonacciError> {
    if n < 0 {
        return Err(FibonacciError::negative(n));
    }
    if n > MAX_INDEX {
        return Err(FibonacciError::out_of_range(n));
    }
    Ok(n as u64)
}
