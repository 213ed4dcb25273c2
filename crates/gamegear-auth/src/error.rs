//! Authentication errors.

use thiserror::Error;

/// Why an auth operation failed.
///
/// Service operations report success as a boolean; this value travels in
/// [`AuthEvent::Failed`](crate::AuthEvent::Failed) so callers can show
/// the reason. Messages are written for end users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email and password did not match an account.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that is already registered.
    #[error("User with this email already exists")]
    UserAlreadyExists(String),

    /// No account for the given email.
    #[error("No account found with this email")]
    UserNotFound(String),

    /// A required signup field was blank.
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    /// Verification attempted before a code was requested.
    #[error("No OTP requested for this email")]
    OtpNotRequested,

    /// The code is past its expiry time.
    #[error("OTP has expired. Please request a new one")]
    OtpExpired,

    /// The code does not match.
    #[error("Invalid OTP")]
    InvalidOtp,

    /// The session record could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<gamegear_cache::CacheError> for AuthError {
    fn from(e: gamegear_cache::CacheError) -> Self {
        AuthError::Storage(e.to_string())
    }
}
