#![allow(clippy::assertions_on_result_states)]

pub mod calculator;
pub mod error;
pub mod iterative;
pub mod recursive;

pub use calculator::{CalculatorKind, FibonacciCalculator, Iterative, NaiveRecursive};
pub use error::FibonacciError;
pub use iterative::compute_iterative;
pub use recursive::compute;
