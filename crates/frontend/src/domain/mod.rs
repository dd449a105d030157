pub mod a001_user;
pub mod a003_product;
pub mod a004_order;
pub mod a005_invoice_request;
pub mod a006_payment;
pub mod a007_chat;
