pub mod constants;
pub mod report;
pub mod serializable;
