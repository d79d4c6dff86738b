pub mod page;

pub use page::{Element, Page, PageFormat};
