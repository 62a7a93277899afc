use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A single listing as reshaped from the upstream remote-jobs API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    pub url: String,
    pub title: String,
    pub company_name: String,
    pub category: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub publication_date: String,
    #[serde(default)]
    pub candidate_required_location: String,
    #[serde(default)]
    pub salary: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplication {
    #[validate(length(min = 2, max = 200))]
    pub fullname: String,
    #[validate(length(min = 2, max = 300))]
    pub address: String,
    #[validate(email)]
    pub email: String,
    pub job_id: u64,
    #[validate(range(max = 80))]
    pub years_of_experience: u32,
    #[validate(length(min = 2))]
    pub qualifications: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobApplication {
    pub id: Uuid,
    pub fullname: String,
    pub address: String,
    pub email: String,
    #[serde(rename = "jobId")]
    pub job_id: u64,
    #[serde(rename = "yearsOfExperience")]
    pub years_of_experience: u32,
    pub qualifications: String,
    #[serde(rename = "appliedAt")]
    pub applied_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn from_new(new: NewJobApplication) -> Self {
        Self {
            id: Uuid::new_v4(),
            fullname: new.fullname,
            address: new.address,
            email: new.email.trim().to_lowercase(),
            job_id: new.job_id,
            years_of_experience: new.years_of_experience,
            qualifications: new.qualifications,
            applied_at: Utc::now(),
        }
    }
}
