pub mod cart_panel;
pub mod list;
