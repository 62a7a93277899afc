use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use chrono::{Duration, Utc};
use serde_json::json;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::crypto::CryptoService;
use crate::models::customer::{Customer, CustomerStatus, NewCustomer};
use crate::service::email_service::Notifier;
use crate::store::customer_store::CustomerStore;
use crate::store::otp_store::OtpStore;
use crate::utils::error::{ApiError, ApiResult};

const OTP_VALIDITY_MINUTES: i64 = 5;
const OTP_TEMPLATE: &str = "./templates/otp_email.html";
const WELCOME_TEMPLATE: &str = "./templates/welcome_email.html";

/// Orchestrates the customer store, OTP store and notifier for registration,
/// verification, code resend and login.
pub struct CustomerService {
    customers: Arc<dyn CustomerStore>,
    otps: Arc<dyn OtpStore>,
    crypto: CryptoService,
    notifier: Arc<dyn Notifier>,
    platform_name: String,

    // One guard per normalized email, held across each read-modify-write so
    // at most one mutation of an account is in flight at a time.
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CustomerService {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        otps: Arc<dyn OtpStore>,
        crypto: CryptoService,
        notifier: Arc<dyn Notifier>,
        platform_name: String,
    ) -> Self {
        Self {
            customers,
            otps,
            crypto,
            notifier,
            platform_name,
            locks: StdMutex::new(HashMap::new()),
        }
    }

    async fn lock_email(&self, email: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap();
            locks.entry(email.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }

    pub async fn register(&self, request: NewCustomer) -> ApiResult<Customer> {
        let new_customer = NewCustomer {
            lastname: request.lastname.trim().to_string(),
            firstname: request.firstname.trim().to_string(),
            email: request.email.trim().to_lowercase(),
            phone: request.phone.trim().to_string(),
            password: request.password,
        };
        new_customer.validate()?;

        let _guard = self.lock_email(&new_customer.email).await;

        let password_hash = self
            .crypto
            .hash_password(&new_customer.password)
            .map_err(|e| ApiError::Hashing(e.to_string()))?;

        let customer = self.customers.insert(Customer {
            id: Uuid::new_v4(),
            lastname: new_customer.lastname,
            firstname: new_customer.firstname,
            email: new_customer.email,
            phone: new_customer.phone,
            password_hash,
            status: CustomerStatus::Pending,
            registered_at: Utc::now(),
        })?;

        let otp = self.otps.issue(&customer.email);
        info!(email = %customer.email, "registered new customer, verification pending");
        self.send_otp_email(&customer, &otp.code).await;

        Ok(customer)
    }

    pub async fn verify(&self, email: &str, code: &str) -> ApiResult<()> {
        let email = email.trim().to_lowercase();
        let code = code.trim();
        if email.is_empty() || code.is_empty() {
            return Err(ApiError::validation("Email and OTP are required"));
        }

        let _guard = self.lock_email(&email).await;

        let record = self
            .otps
            .find_matching(&email, code)
            .ok_or(ApiError::InvalidCode)?;

        if Utc::now() - record.issued_at > Duration::minutes(OTP_VALIDITY_MINUTES) {
            return Err(ApiError::Expired);
        }

        // Re-verifying an already-active account still succeeds, but the
        // welcome mail only goes out on the actual transition.
        let transitioned = self.customers.mark_active(&email)?;
        if transitioned {
            info!(%email, "customer verified");
            if let Some(customer) = self.customers.find_by_email(&email) {
                self.send_welcome_email(&customer).await;
            }
        }

        Ok(())
    }

    pub async fn resend_code(&self, email: &str) -> ApiResult<()> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ApiError::validation("Email is required"));
        }

        let _guard = self.lock_email(&email).await;

        let customer = self
            .customers
            .find_by_email(&email)
            .ok_or_else(|| ApiError::not_found("No account with that email"))?;

        // Deliberately status-independent; prior codes stay outstanding.
        let otp = self.otps.issue(&customer.email);
        self.send_otp_email(&customer, &otp.code).await;

        Ok(())
    }

    pub async fn login(&self, email_or_phone: &str, password: &str) -> ApiResult<Customer> {
        let identifier = email_or_phone.trim().to_lowercase();
        if identifier.is_empty() || password.is_empty() {
            return Err(ApiError::validation("emailOrPhone and password are required"));
        }

        let customer = self
            .customers
            .find_by_email_or_phone(&identifier)
            .ok_or(ApiError::InvalidCredentials)?;

        let matches = self
            .crypto
            .verify_password(password, &customer.password_hash)
            .map_err(|e| ApiError::Hashing(e.to_string()))?;
        if !matches {
            return Err(ApiError::InvalidCredentials);
        }

        if !customer.is_active() {
            return Err(ApiError::NotVerified);
        }

        Ok(customer)
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        self.customers.all()
    }

    async fn send_otp_email(&self, customer: &Customer, code: &str) {
        let data = json!({
            "name": customer.firstname,
            "otp": code,
            "platformName": self.platform_name,
        });
        if let Err(err) = self
            .notifier
            .notify(&customer.email, "Verify Your Email", OTP_TEMPLATE, &data)
            .await
        {
            warn!(email = %customer.email, error = %err, "failed to deliver verification code");
        }
    }

    async fn send_welcome_email(&self, customer: &Customer) {
        let data = json!({
            "name": customer.firstname,
            "platformName": self.platform_name,
        });
        if let Err(err) = self
            .notifier
            .notify(
                &customer.email,
                &format!("Welcome to {}", self.platform_name),
                WELCOME_TEMPLATE,
                &data,
            )
            .await
        {
            warn!(email = %customer.email, error = %err, "failed to deliver welcome email");
        }
    }
}
