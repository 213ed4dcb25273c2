//! Authentication for the GameGear storefront.
//!
//! A mock user directory stands in for a real identity provider. Users sign
//! in with a password or with a six-digit one-time code, and the signed-in
//! user is remembered in a [`KeyValueStore`](gamegear_cache::KeyValueStore)
//! under the `user` key.

mod directory;
mod error;
mod otp;
mod service;
mod user;

pub use directory::UserDirectory;
pub use error::AuthError;
pub use otp::{OneTimeCode, DEFAULT_OTP_TTL_SECS, OTP_LEN};
pub use service::{AuthEvent, AuthService, AuthSettings, SESSION_KEY};
pub use user::User;
