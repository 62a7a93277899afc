use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use validator::Validate;

use crate::models::job::{Job, JobApplication, NewJobApplication};
use crate::service::email_service::Notifier;
use crate::utils::error::{ApiError, ApiResult};

const APPLICATION_TEMPLATE: &str = "./templates/application_received.html";

#[derive(Debug, Deserialize)]
struct UpstreamListing {
    jobs: Vec<Job>,
}

/// Thin proxy over the third-party remote-jobs API, plus the in-memory
/// application book.
pub struct JobService {
    client: reqwest::Client,
    base_url: String,
    notifier: Arc<dyn Notifier>,
    applications: RwLock<Vec<JobApplication>>,
}

impl JobService {
    pub fn new(base_url: &str, notifier: Arc<dyn Notifier>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            notifier,
            applications: RwLock::new(Vec::new()),
        })
    }

    pub async fn list_jobs(
        &self,
        limit: Option<u32>,
        category: Option<&str>,
        company: Option<&str>,
    ) -> ApiResult<Vec<Job>> {
        let mut request = self
            .client
            .get(format!("{}/remote-jobs", self.base_url));

        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }
        if let Some(company) = company {
            request = request.query(&[("company_name", company)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "upstream answered {}",
                response.status()
            )));
        }

        let listing: UpstreamListing = response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        Ok(listing.jobs)
    }

    /// Category names across the current listing, deduplicated and ordered.
    pub async fn list_categories(&self) -> ApiResult<Vec<String>> {
        let jobs = self.list_jobs(None, None, None).await?;
        let categories: BTreeSet<String> = jobs.into_iter().map(|job| job.category).collect();
        Ok(categories.into_iter().collect())
    }

    pub async fn apply(&self, request: NewJobApplication) -> ApiResult<JobApplication> {
        request.validate()?;

        let application = JobApplication::from_new(request);
        self.applications.write().unwrap().push(application.clone());

        let data = json!({
            "name": application.fullname,
            "jobId": application.job_id.to_string(),
        });
        if let Err(err) = self
            .notifier
            .notify(
                &application.email,
                "Application Received",
                APPLICATION_TEMPLATE,
                &data,
            )
            .await
        {
            warn!(email = %application.email, error = %err, "failed to acknowledge application");
        }

        Ok(application)
    }

    pub fn applications(&self) -> Vec<JobApplication> {
        self.applications.read().unwrap().clone()
    }
}
