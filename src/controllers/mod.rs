pub mod customer_controller;
pub mod job_controller;
