use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One outstanding verification code. Records are append-only; issuing a new
/// code for an email does not invalidate earlier ones, and expiry is computed
/// at verification time rather than enforced here.
#[derive(Debug, Clone, Serialize)]
pub struct OtpCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    #[serde(rename = "issuedAt")]
    pub issued_at: DateTime<Utc>,
}
