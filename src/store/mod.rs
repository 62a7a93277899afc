pub mod customer_store;
pub mod otp_store;
