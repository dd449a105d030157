pub mod login;
pub mod payment_return;
pub mod register;
