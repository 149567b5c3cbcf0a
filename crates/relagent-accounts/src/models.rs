//! Account models for the demo directory

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user of the demo application
///
/// The password is stored in clear text by design: this directory
/// reproduces the "any password works" demo behavior and must not be
/// mistaken for an authentication system.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(skip)]
    pub(crate) password: String,
    /// Forces the password-change modal on next login
    pub must_change_password: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Plain string comparison; demo-only
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Input for registering a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Outcome of a successful credential check
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Credentials accepted, session can start
    LoggedIn(Account),
    /// Credentials accepted but a password change is enforced first
    PasswordChangeRequired(Account),
}

impl LoginOutcome {
    /// The authenticated account regardless of outcome
    pub fn account(&self) -> &Account {
        match self {
            LoginOutcome::LoggedIn(account) => account,
            LoginOutcome::PasswordChangeRequired(account) => account,
        }
    }
}

/// Password rules enforced on change and signup
#[derive(Debug, Clone, Serialize)]
pub struct PasswordPolicy {
    /// Minimum password length
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        // The original demo enforces 8+ characters on forced change.
        Self { min_length: 8 }
    }
}

/// Receipt for a simulated password reset request
///
/// No email is sent; the message is what the UI shows as a toast.
#[derive(Debug, Clone, Serialize)]
pub struct ResetReceipt {
    pub email: String,
    pub message: String,
    pub requested_at: DateTime<Utc>,
}
