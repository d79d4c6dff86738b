use serde::{Deserialize, Serialize};

/// Machine-readable form of the result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciReport {
    pub index: i64,
    pub label: String,
    pub value: u64,
    /// Name of the calculator that produced `value`.
    pub calculator: String,
}

impl FibonacciReport {
    pub fn new(index: i64, label: impl Into<String>, value: u64, calculator: &str) -> Self {
        Self {
            index,
            label: label.into(),
            value,
            calculator: calculator.to_string(),
        }
    }

    /// `label = value`, the line shown in the page's success box.
    pub fn summary(&self) -> String {
        format!("{} = {}", self.label, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DISPLAY_INDEX, DISPLAY_LABEL};

    #[test]
    fn summary_matches_page_line() {
        let report = FibonacciReport::new(DISPLAY_INDEX, DISPLAY_LABEL, 55, "recursive");
        assert_eq!(report.summary(), "fibonacci_recursive(10) = 55");
    }

    #[test]
    fn json_field_names() {
        let report = FibonacciReport::new(10, "fibonacci_recursive(10)", 55, "recursive");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["index"], 10);
        assert_eq!(value["value"], 55);
        assert_eq!(value["label"], "fibonacci_recursive(10)");
        assert_eq!(value["calculator"], "recursive");
    }
}
