//! User types.

use gamegear_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// A signed-in user as the storefront sees it. Never carries a password.
///
/// Serialized as `{"id","name","email","isAdmin"}`, the shape kept in
/// storage under the session key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// Create a non-admin user.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            is_admin: false,
        }
    }

    /// Grant admin access.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Name to greet the user with, falling back to the email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}
