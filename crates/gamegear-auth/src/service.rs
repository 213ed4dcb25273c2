//! The auth service: current user, session persistence and login flows.

use crate::otp::{OneTimeCode, DEFAULT_OTP_TTL_SECS};
use crate::{AuthError, User, UserDirectory};
use chrono::{DateTime, Utc};
use gamegear_cache::{Cache, KeyValueStore};
use gamegear_commerce::events::{SubscriptionId, Subscribers};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Storage key holding the signed-in user.
pub const SESSION_KEY: &str = "user";

/// Tunables for [`AuthService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    /// How long a one-time code stays valid.
    pub otp_ttl: Duration,
    /// Pause before each async operation, imitating a network round trip.
    pub simulated_latency: Duration,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            otp_ttl: Duration::from_secs(DEFAULT_OTP_TTL_SECS),
            simulated_latency: Duration::ZERO,
        }
    }
}

/// Outcome of an auth operation, published after the state has changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// A saved session was picked up at startup.
    Restored(User),
    /// Password or one-time-code login succeeded.
    LoggedIn(User),
    /// A new account was registered. The user is not signed in.
    SignedUp(User),
    LoggedOut,
    /// A code was issued. Printing or mailing it is up to the subscriber.
    OtpIssued { email: String, code: String },
    Failed(AuthError),
}

impl fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthEvent::Restored(user) => write!(f, "Welcome back, {}", user.display_name()),
            AuthEvent::LoggedIn(_) => write!(f, "Login successful!"),
            AuthEvent::SignedUp(_) => write!(f, "Account created successfully! Please log in."),
            AuthEvent::LoggedOut => write!(f, "You have been logged out"),
            AuthEvent::OtpIssued { .. } => write!(f, "OTP sent to your email"),
            AuthEvent::Failed(e) => write!(f, "{}", e),
        }
    }
}

/// Signs users in and out against a [`UserDirectory`].
///
/// Every operation reports success as a `bool`. The reason for a failure
/// is published as [`AuthEvent::Failed`] and logged.
pub struct AuthService<S> {
    cache: Cache<S>,
    directory: UserDirectory,
    current: Option<User>,
    codes: HashMap<String, OneTimeCode>,
    settings: AuthSettings,
    clock: Box<dyn Fn() -> DateTime<Utc>>,
    subscribers: Subscribers<AuthEvent>,
}

impl<S: KeyValueStore> AuthService<S> {
    /// Create a signed-out service over the mock directory.
    pub fn new(store: S, settings: AuthSettings) -> Self {
        Self {
            cache: Cache::new(store),
            directory: UserDirectory::mock(),
            current: None,
            codes: HashMap::new(),
            settings,
            clock: Box::new(Utc::now),
            subscribers: Subscribers::new(),
        }
    }

    /// Replace the time source used for code expiry.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn subscribe(&mut self, callback: impl Fn(&AuthEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Check if the signed-in user is an admin. False when signed out.
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn settings(&self) -> &AuthSettings {
        &self.settings
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Load the saved session, if any.
    ///
    /// A record that cannot be read is deleted and the service stays
    /// signed out.
    pub fn restore(&mut self) -> bool {
        match self.cache.get::<User>(SESSION_KEY) {
            Ok(Some(user)) => {
                info!(user_id = %user.id, "Restored session");
                self.current = Some(user.clone());
                self.subscribers.publish(&AuthEvent::Restored(user));
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session record");
                if let Err(e) = self.cache.delete(SESSION_KEY) {
                    warn!(error = %e, "Failed to delete session record");
                }
                false
            }
        }
    }

    /// Sign in with email and password.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.simulate_latency().await;

        match self.directory.authenticate(email, password) {
            Ok(user) => self.sign_in(user),
            Err(e) => self.fail("login", e),
        }
    }

    /// Register a new customer account. Does not sign in.
    pub async fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
        self.simulate_latency().await;

        match self.directory.register(name, email, password) {
            Ok(user) => {
                self.subscribers.publish(&AuthEvent::SignedUp(user));
                true
            }
            Err(e) => self.fail("signup", e),
        }
    }

    /// Sign out and forget the saved session.
    pub fn logout(&mut self) {
        if let Err(e) = self.cache.delete(SESSION_KEY) {
            warn!(error = %e, "Failed to delete session record");
        }
        if let Some(user) = self.current.take() {
            info!(user_id = %user.id, "Logged out");
        }
        self.subscribers.publish(&AuthEvent::LoggedOut);
    }

    /// Issue a one-time code for a registered email, replacing any earlier one.
    pub async fn request_otp(&mut self, email: &str) -> bool {
        self.simulate_latency().await;

        if self.directory.find_by_email(email).is_none() {
            return self.fail("request_otp", AuthError::UserNotFound(email.to_string()));
        }

        let ttl = chrono::Duration::from_std(self.settings.otp_ttl)
            .unwrap_or_else(|_| chrono::Duration::seconds(DEFAULT_OTP_TTL_SECS as i64));
        let otp = OneTimeCode::generate(email, ttl, (self.clock)());
        // Demo delivery: the code goes to the log and to subscribers.
        info!(email, code = %otp.code, expires_at = %otp.expires_at, "Issued one-time code");

        let event = AuthEvent::OtpIssued {
            email: email.to_string(),
            code: otp.code.clone(),
        };
        self.codes.insert(email.to_string(), otp);
        self.subscribers.publish(&event);
        true
    }

    /// Sign in with a previously issued code. The code is consumed on success.
    pub async fn verify_otp(&mut self, email: &str, code: &str) -> bool {
        self.simulate_latency().await;

        let Some(otp) = self.codes.get(email) else {
            return self.fail("verify_otp", AuthError::OtpNotRequested);
        };
        if let Err(e) = otp.verify(code, (self.clock)()) {
            if e == AuthError::OtpExpired {
                self.codes.remove(email);
            }
            return self.fail("verify_otp", e);
        }

        let Some(user) = self.directory.find_by_email(email).cloned() else {
            self.codes.remove(email);
            return self.fail("verify_otp", AuthError::UserNotFound(email.to_string()));
        };
        if self.sign_in(user) {
            self.codes.remove(email);
            true
        } else {
            false
        }
    }

    fn sign_in(&mut self, user: User) -> bool {
        if let Err(e) = self.cache.set(SESSION_KEY, &user) {
            return self.fail("sign_in", e.into());
        }
        info!(user_id = %user.id, admin = user.is_admin, "Logged in");
        self.current = Some(user.clone());
        self.subscribers.publish(&AuthEvent::LoggedIn(user));
        true
    }

    fn fail(&self, operation: &'static str, error: AuthError) -> bool {
        warn!(operation, error = %error, "Auth operation failed");
        self.subscribers.publish(&AuthEvent::Failed(error));
        false
    }

    async fn simulate_latency(&self) {
        if !self.settings.simulated_latency.is_zero() {
            debug!(latency_ms = self.settings.simulated_latency.as_millis() as u64, "Simulating latency");
            tokio::time::sleep(self.settings.simulated_latency).await;
        }
    }
}

impl<S> fmt::Debug for AuthService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("current", &self.current)
            .field("pending_codes", &self.codes.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
