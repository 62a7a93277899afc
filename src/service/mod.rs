pub mod customer_service;
pub mod email_service;
pub mod job_service;
