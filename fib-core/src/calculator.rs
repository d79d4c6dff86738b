use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

use crate::error::FibonacciError;

/// Something that maps an index to its Fibonacci value.
///
/// Implementations are stateless: the same `n` always gives the same result
/// and nothing outside the return value changes.
pub trait FibonacciCalculator: Send + Sync {
    /// Short name shown in reports and logs.
    fn name(&self) -> &'static str;

    fn compute(&self, n: i64) -> Result<u64, FibonacciError>;
}

/// Default calculator, the plain double recursion in [`crate::recursive`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveRecursive;

impl FibonacciCalculator for NaiveRecursive {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn compute(&self, n: i64) -> Result<u64, FibonacciError> {
        crate::recursive::compute(n)
    }
}

/// Optimized calculator, see [`crate::iterative`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl FibonacciCalculator for Iterative {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn compute(&self, n: i64) -> Result<u64, FibonacciError> {
        crate::iterative::compute_iterative(n)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum CalculatorKind {
    #[default]
    Recursive,
    Iterative,
}

impl CalculatorKind {
    pub fn calculator(self) -> Box<dyn FibonacciCalculator> {
        match self {
            CalculatorKind::Recursive => Box::new(NaiveRecursive),
            CalculatorKind::Iterative => Box::new(Iterative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names_match_calculators() {
        for kind in CalculatorKind::iter() {
            assert_eq!(kind.to_string(), kind.calculator().name());
        }
    }

    #[test]
    fn default_is_recursive() {
        assert_eq!(CalculatorKind::default(), CalculatorKind::Recursive);
        assert_eq!(CalculatorKind::default().calculator().name(), "recursive");
    }

    #[test]
    fn all_kinds_agree() {
        for kind in CalculatorKind::iter() {
            let calc = kind.calculator();
            assert_eq!(calc.compute(10), Ok(55), "{kind}");
            assert!(calc.compute(-1).is_err(), "{kind}");
        }
    }
}
