use actix_web::HttpRequest;

/// Shared-secret gate for the privileged endpoints. True iff a key was
/// presented, it is non-empty, and it equals the process-wide secret.
pub fn authorize(presented: Option<&str>, secret: &str) -> bool {
    match presented {
        Some(key) if !key.is_empty() => key == secret,
        _ => false,
    }
}

/// Pulls the `apikey` header off a request, if present and valid UTF-8.
pub fn api_key_from(req: &HttpRequest) -> Option<&str> {
    req.headers().get("apikey").and_then(|v| v.to_str().ok())
}
