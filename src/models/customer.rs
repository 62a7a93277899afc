use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Pending,
    Active,
}

#[derive(Debug, Serialize, Clone)]
pub struct Customer {
    pub id: Uuid,
    pub lastname: String,
    pub firstname: String,
    pub email: String,
    pub phone: String,

    #[serde(skip_serializing)] // the digest never leaves the process
    pub password_hash: String,
    pub status: CustomerStatus,
    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime<Utc>,
}

impl Customer {
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 2, max = 100))]
    pub lastname: String,
    #[validate(length(min = 2, max = 100))]
    pub firstname: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, max = 20))]
    pub phone: String,
    #[validate(length(min = 6))]
    pub password: String,
}
