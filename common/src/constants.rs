/// Index rendered on the result page. Fixed; the page takes no input.
pub const DISPLAY_INDEX: i64 = 10;

/// Largest index whose Fibonacci value fits in a `u64`: F(93) = 12200160415121876738.
pub const MAX_INDEX: i64 = 93;

/// Label under which the computed value is shown.
pub const DISPLAY_LABEL: &str = "fibonacci_recursive(10)";

pub const PAGE_TITLE: &str = "Fibonacci Sequence - Recursive Implementation";
pub const PAGE_INTRO: &str =
    "This app displays the result of the first example from fibonacci-python-guide.md";
pub const EXAMPLE_HEADER: &str = "Example Usage:";
pub const RESULT_HEADER: &str = "Result:";
pub const PAGE_FOOTNOTE: &str = "This uses the recursive implementation from the first example in the fibonacci-python-guide.md file.";
