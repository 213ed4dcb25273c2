//! The mock account directory.

use crate::{AuthError, User};
use gamegear_commerce::ids::UserId;
use tracing::info;

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

/// In-memory accounts with plain-text passwords. Demo use only.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    accounts: Vec<Account>,
}

impl UserDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The two demo accounts: an admin and a regular customer.
    pub fn mock() -> Self {
        let mut directory = Self::new();
        directory.accounts.push(Account {
            user: User::new(UserId::new("1"), "Admin User", "admin@gamegear.com").with_admin(true),
            password: "admin123".to_string(),
        });
        directory.accounts.push(Account {
            user: User::new(UserId::new("2"), "Regular User", "user@example.com"),
            password: "user123".to_string(),
        });
        directory
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Look up a user by exact email.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.accounts
            .iter()
            .find(|a| a.user.email == email)
            .map(|a| &a.user)
    }

    /// Check an email and password pair. Both must match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone())
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Add a non-admin account.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        for (field, value) in [("name", name), ("email", email), ("password", password)] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingField(field));
            }
        }
        if self.find_by_email(email).is_some() {
            return Err(AuthError::UserAlreadyExists(email.to_string()));
        }

        let user = User::new(self.next_id(), name.trim(), email);
        self.accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        info!(user_id = %user.id, email, "Registered account");
        Ok(user)
    }

    fn next_id(&self) -> UserId {
        let max = self
            .accounts
            .iter()
            .filter_map(|a| a.user.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        UserId::new((max + 1).to_string())
    }
}
