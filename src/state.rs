use std::sync::Arc;

use color_eyre::Result;

use crate::config::config::Config;
use crate::config::crypto::CryptoService;
use crate::service::customer_service::CustomerService;
use crate::service::email_service::{EmailService, Notifier};
use crate::service::job_service::JobService;
use crate::store::customer_store::MemoryCustomerStore;
use crate::store::otp_store::MemoryOtpStore;

/// Shared application state, one instance across all workers.
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub job_service: Arc<JobService>,
    pub api_key: String,
}

impl AppState {
    pub fn new(
        customer_service: Arc<CustomerService>,
        job_service: Arc<JobService>,
        api_key: String,
    ) -> Self {
        Self {
            customer_service,
            job_service,
            api_key,
        }
    }

    /// Wire the in-memory stores and the SMTP notifier from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let notifier: Arc<dyn Notifier> = Arc::new(EmailService::new(
            &config.smtp_host,
            &config.smtp_user,
            &config.smtp_pass,
            &config.from_address,
        )?);

        let customer_service = Arc::new(CustomerService::new(
            Arc::new(MemoryCustomerStore::new()),
            Arc::new(MemoryOtpStore::new()),
            CryptoService,
            notifier.clone(),
            config.platform_name.clone(),
        ));

        let job_service = Arc::new(
            JobService::new(&config.jobs_api_base_url, notifier)
                .map_err(|e| eyre::eyre!("Building job proxy: {e}"))?,
        );

        Ok(Self::new(customer_service, job_service, config.api_key.clone()))
    }
}
