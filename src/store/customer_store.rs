use std::sync::RwLock;

use crate::models::customer::{Customer, CustomerStatus};
use crate::utils::error::{ApiError, ApiResult};

/// Storage seam for account records. The flow logic only ever talks to this
/// trait, so the in-memory backing can be swapped for a real database without
/// touching the registration flow.
pub trait CustomerStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<Customer>;
    fn find_by_email_or_phone(&self, value: &str) -> Option<Customer>;

    /// Fails with `Conflict` if the email or phone is already taken.
    fn insert(&self, customer: Customer) -> ApiResult<Customer>;

    /// Pending -> Active. Returns whether a transition actually happened, so
    /// callers can make re-verification idempotent. `NotFound` when no
    /// account carries that email.
    fn mark_active(&self, email: &str) -> ApiResult<bool>;

    fn all(&self) -> Vec<Customer>;
}

/// Ordered collection scanned linearly. Fine at this scale; a keyed index
/// only becomes worthwhile once the listing grows past a few thousand rows.
#[derive(Default)]
pub struct MemoryCustomerStore {
    customers: RwLock<Vec<Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerStore for MemoryCustomerStore {
    fn find_by_email(&self, email: &str) -> Option<Customer> {
        let customers = self.customers.read().unwrap();
        customers.iter().find(|c| c.email == email).cloned()
    }

    fn find_by_email_or_phone(&self, value: &str) -> Option<Customer> {
        let customers = self.customers.read().unwrap();
        customers
            .iter()
            .find(|c| c.email == value || c.phone == value)
            .cloned()
    }

    fn insert(&self, customer: Customer) -> ApiResult<Customer> {
        let mut customers = self.customers.write().unwrap();
        if customers.iter().any(|c| c.email == customer.email) {
            return Err(ApiError::conflict("Email is already registered"));
        }
        if customers.iter().any(|c| c.phone == customer.phone) {
            return Err(ApiError::conflict("Phone number is already registered"));
        }
        customers.push(customer.clone());
        Ok(customer)
    }

    fn mark_active(&self, email: &str) -> ApiResult<bool> {
        let mut customers = self.customers.write().unwrap();
        let customer = customers
            .iter_mut()
            .find(|c| c.email == email)
            .ok_or_else(|| ApiError::not_found("No account with that email"))?;

        if customer.status == CustomerStatus::Active {
            return Ok(false);
        }
        customer.status = CustomerStatus::Active;
        Ok(true)
    }

    fn all(&self) -> Vec<Customer> {
        self.customers.read().unwrap().clone()
    }
}
