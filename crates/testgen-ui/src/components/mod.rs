//! Leptos UI components for the test explorer

pub mod filter_bar;
pub mod test_list;

pub use filter_bar::{FilterBar, TagToggle};
pub use test_list::{FileItem, TestItem, TestList};
