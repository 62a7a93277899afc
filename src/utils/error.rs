use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::utils::response::ApiResponse;

pub type ApiResult<T> = Result<T, ApiError>;

/// Request-level failure taxonomy. Every variant is converted into the JSON
/// envelope by the `ResponseError` impl; nothing propagates uncaught.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("Verification code has expired, please request a new one")]
    Expired,

    // Unknown identifier and wrong password share this variant so the
    // response never reveals which one it was.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is not verified, please verify your email first")]
    NotVerified,

    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Job listing service is unavailable: {0}")]
    Upstream(String),

    #[error("Internal error")]
    Hashing(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_)
            | ApiError::Conflict(_)
            | ApiError::InvalidCode
            | ApiError::Expired
            | ApiError::InvalidCredentials
            | ApiError::NotVerified
            | ApiError::NotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Hashing(detail) = self {
            tracing::error!(%detail, "password hashing failed");
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::fail(self.to_string()))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort_unstable();
        ApiError::Validation(format!("Invalid or missing fields: {}", fields.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::InvalidCode.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Upstream("down".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Hashing("oops".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn credential_failures_render_identically() {
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            ApiError::InvalidCredentials.to_string()
        );
        // The hashing detail must never reach the response body.
        assert_eq!(ApiError::Hashing("argon2 oom".into()).to_string(), "Internal error");
    }
}
