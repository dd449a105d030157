pub mod pay_button;

pub use pay_button::PayButton;
