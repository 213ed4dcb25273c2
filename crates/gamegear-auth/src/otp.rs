//! One-time login codes.

use crate::AuthError;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Digits in a one-time code.
pub const OTP_LEN: usize = 6;

/// How long a code stays valid unless configured otherwise.
pub const DEFAULT_OTP_TTL_SECS: u64 = 10 * 60;

/// A code issued to an email address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OneTimeCode {
    pub email: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OneTimeCode {
    /// Issue a fresh random code in `100000..=999999`.
    pub fn generate(email: impl Into<String>, ttl: Duration, now: DateTime<Utc>) -> Self {
        let code = rand::thread_rng().gen_range(100_000..=999_999u32);
        Self::with_code(email, code.to_string(), ttl, now)
    }

    /// Issue a known code.
    pub fn with_code(
        email: impl Into<String>,
        code: impl Into<String>,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Expired once `now` is strictly past the expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Check a submitted code. Expiry is checked before the digits.
    pub fn verify(&self, submitted: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        if self.is_expired(now) {
            return Err(AuthError::OtpExpired);
        }
        if submitted.trim() != self.code {
            return Err(AuthError::InvalidOtp);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        let now = Utc::now();
        for _ in 0..50 {
            let otp = OneTimeCode::generate("a@b.c", Duration::minutes(10), now);
            assert_eq!(otp.code.len(), OTP_LEN);
            let n: u32 = otp.code.parse().unwrap();
            assert!((100_000..=999_999).contains(&n));
            assert_eq!(otp.expires_at - otp.issued_at, Duration::minutes(10));
        }
    }

    #[test]
    fn test_verify() {
        let now = Utc::now();
        let otp = OneTimeCode::with_code("a@b.c", "123456", Duration::minutes(10), now);

        assert_eq!(otp.verify("123456", now), Ok(()));
        assert_eq!(otp.verify(" 123456 ", now), Ok(()));
        assert_eq!(otp.verify("654321", now), Err(AuthError::InvalidOtp));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let otp = OneTimeCode::with_code("a@b.c", "123456", Duration::minutes(10), now);

        assert!(!otp.is_expired(now + Duration::minutes(10)));
        assert!(otp.is_expired(now + Duration::minutes(10) + Duration::milliseconds(1)));
        assert_eq!(
            otp.verify("123456", now + Duration::minutes(11)),
            Err(AuthError::OtpExpired)
        );
    }
}
