use actix_web::web;

use crate::controllers::{customer_controller, job_controller};
use crate::utils::error::ApiError;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::validation(err.to_string()).into()
    }))
    .route("/", web::get().to(customer_controller::index))
    .route("/register", web::post().to(customer_controller::register))
    .route(
        "/verify/{email}/{otp}",
        web::get().to(customer_controller::verify),
    )
    .route(
        "/resend-otp/{email}",
        web::get().to(customer_controller::resend_otp),
    )
    .route("/login", web::post().to(customer_controller::login))
    .route("/jobs", web::get().to(job_controller::list_jobs))
    .route(
        "/jobs/categories",
        web::get().to(job_controller::list_categories),
    )
    .route("/job/apply", web::post().to(job_controller::apply))
    .route(
        "/admin/customers",
        web::get().to(customer_controller::admin_customers),
    );
}
