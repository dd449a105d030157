//! Tabs of the center area.
//!
//! - `page`: wrapper that hides inactive tabs without unmounting them
//! - `registry`: tab key to page component
//! - `tab_labels`: tab keys and their titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
