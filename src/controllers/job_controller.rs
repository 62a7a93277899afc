use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::models::job::NewJobApplication;
use crate::state::AppState;
use crate::utils::auth::{api_key_from, authorize};
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub length: Option<u32>,
    pub category: Option<String>,
    pub company: Option<String>,
}

pub async fn list_jobs(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<JobsQuery>,
) -> ApiResult<HttpResponse> {
    if !authorize(api_key_from(&req), &state.api_key) {
        return Err(ApiError::Unauthorized);
    }

    let jobs = state
        .job_service
        .list_jobs(
            query.length,
            query.category.as_deref(),
            query.company.as_deref(),
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::data(jobs)))
}

pub async fn list_categories(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let categories = state.job_service.list_categories().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::data(categories)))
}

pub async fn apply(
    state: web::Data<AppState>,
    request: web::Json<NewJobApplication>,
) -> ApiResult<HttpResponse> {
    let application = state.job_service.apply(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with("Application received", application)))
}
