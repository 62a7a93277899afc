use std::sync::RwLock;

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::models::otp_code::OtpCode;

/// Storage seam for outstanding verification codes. Issuing appends; earlier
/// codes for the same email stay valid until their own window closes.
pub trait OtpStore: Send + Sync {
    fn issue(&self, email: &str) -> OtpCode;

    /// Most recent record matching (email, code), or none. Expiry is the
    /// caller's concern.
    fn find_matching(&self, email: &str, code: &str) -> Option<OtpCode>;
}

#[derive(Default)]
pub struct MemoryOtpStore {
    codes: RwLock<Vec<OtpCode>>,
}

impl MemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift an email's outstanding codes into the past, to exercise the
    /// expiry window without a clock abstraction.
    #[cfg(test)]
    pub fn backdate(&self, email: &str, by: chrono::Duration) {
        let mut codes = self.codes.write().unwrap();
        for record in codes.iter_mut().filter(|r| r.email == email) {
            record.issued_at = record.issued_at - by;
        }
    }
}

impl OtpStore for MemoryOtpStore {
    fn issue(&self, email: &str) -> OtpCode {
        let code = rand::thread_rng().gen_range(100_000..=999_999);
        let record = OtpCode {
            id: Uuid::new_v4(),
            email: email.to_string(),
            code: code.to_string(),
            issued_at: Utc::now(),
        };
        self.codes.write().unwrap().push(record.clone());
        record
    }

    fn find_matching(&self, email: &str, code: &str) -> Option<OtpCode> {
        let codes = self.codes.read().unwrap();
        codes
            .iter()
            .rev()
            .find(|r| r.email == email && r.code == code)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_codes_are_six_digits() {
        let store = MemoryOtpStore::new();
        for _ in 0..50 {
            let record = store.issue("a@x.com");
            let value: u32 = record.code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn reissue_keeps_prior_codes_outstanding() {
        let store = MemoryOtpStore::new();
        let first = store.issue("a@x.com");
        let second = store.issue("a@x.com");

        assert!(store.find_matching("a@x.com", &first.code).is_some());
        assert!(store.find_matching("a@x.com", &second.code).is_some());
    }

    #[test]
    fn matching_is_scoped_to_the_email() {
        let store = MemoryOtpStore::new();
        let record = store.issue("a@x.com");

        assert!(store.find_matching("b@x.com", &record.code).is_none());
        assert!(store.find_matching("a@x.com", "000000").is_none());
    }
}
