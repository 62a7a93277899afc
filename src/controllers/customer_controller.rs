use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::models::customer::NewCustomer;
use crate::state::AppState;
use crate::utils::auth::{api_key_from, authorize};
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "emailOrPhone", default)]
    pub email_or_phone: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::ok("Customer registration API is running"))
}

pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<NewCustomer>,
) -> ApiResult<HttpResponse> {
    let customer = state.customer_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with(
        "Account created, a verification code has been sent to your email",
        customer,
    )))
}

pub async fn verify(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (email, otp) = path.into_inner();
    state.customer_service.verify(&email, &otp).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok("Account verified successfully")))
}

pub async fn resend_otp(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.customer_service.resend_code(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::ok(
        "A new verification code has been sent to your email",
    )))
}

pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let customer = state
        .customer_service
        .login(
            request.email_or_phone.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with("Login successful", customer)))
}

pub async fn admin_customers(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> ApiResult<HttpResponse> {
    if !authorize(api_key_from(&req), &state.api_key) {
        return Err(ApiError::Unauthorized);
    }
    let customers = state.customer_service.list_customers();
    Ok(HttpResponse::Ok().json(ApiResponse::data(customers)))
}
