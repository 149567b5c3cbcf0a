//! In-memory account directory

use chrono::Utc;
use tracing::{info, warn};

use crate::error::{AccountError, AccountResult};
use crate::models::{Account, LoginOutcome, NewAccount, PasswordPolicy, ResetReceipt};

/// In-memory directory of demo accounts
///
/// Reconstructed from seed data on every process start; nothing persists.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    policy: PasswordPolicy,
}

impl AccountDirectory {
    /// Create an empty directory with the default password policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory with a custom password policy
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self {
            accounts: Vec::new(),
            policy,
        }
    }

    /// Seed the built-in admin account that must change its password on
    /// first login
    pub fn seed_demo_admin(&mut self) {
        self.accounts.push(Account {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            full_name: "Admin".to_string(),
            password: "admin123".to_string(),
            must_change_password: true,
            created_at: Utc::now(),
        });
    }

    /// Register a new account
    ///
    /// Rejects duplicate usernames and emails and applies the password
    /// policy. Usernames are exact-match unique, as in the original demo.
    pub fn register(&mut self, new_account: NewAccount) -> AccountResult<Account> {
        if new_account.username.trim().is_empty() {
            return Err(AccountError::ValidationError {
                field: "username".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !new_account.email.contains('@') {
            return Err(AccountError::ValidationError {
                field: "email".to_string(),
                reason: "invalid email format".to_string(),
            });
        }
        if self
            .accounts
            .iter()
            .any(|a| a.username == new_account.username)
        {
            return Err(AccountError::UsernameTaken(new_account.username));
        }
        if self.accounts.iter().any(|a| a.email == new_account.email) {
            return Err(AccountError::EmailTaken(new_account.email));
        }
        self.check_policy(&new_account.password)?;

        let account = Account {
            username: new_account.username,
            email: new_account.email,
            full_name: new_account.full_name,
            password: new_account.password,
            must_change_password: false,
            created_at: Utc::now(),
        };
        info!(username = %account.username, "account registered");

        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Check credentials and report whether a password change is enforced
    ///
    /// Unknown username and wrong password both collapse into
    /// `InvalidCredentials`; the demo UI shows one generic message.
    pub fn authenticate(&self, username: &str, password: &str) -> AccountResult<LoginOutcome> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.username == username)
            .filter(|a| a.password_matches(password))
            .ok_or(AccountError::InvalidCredentials)?;

        if account.must_change_password {
            warn!(username, "login accepted, password change enforced");
            Ok(LoginOutcome::PasswordChangeRequired(account.clone()))
        } else {
            info!(username, "login accepted");
            Ok(LoginOutcome::LoggedIn(account.clone()))
        }
    }

    /// Change a password, clearing the forced-change flag
    pub fn change_password(
        &mut self,
        username: &str,
        new_password: &str,
        confirmation: &str,
    ) -> AccountResult<()> {
        if new_password != confirmation {
            return Err(AccountError::PasswordMismatch);
        }
        self.check_policy(new_password)?;

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.username == username)
            .ok_or_else(|| AccountError::NotFound(username.to_string()))?;

        account.password = new_password.to_string();
        account.must_change_password = false;
        info!(username, "password changed");
        Ok(())
    }

    /// Request a simulated password reset for a registered email
    ///
    /// Returns the toast message the UI shows; no email is sent.
    pub fn request_password_reset(&self, email: &str) -> AccountResult<ResetReceipt> {
        if !self.accounts.iter().any(|a| a.email == email) {
            return Err(AccountError::NotFound(email.to_string()));
        }

        info!(email, "password reset requested (simulated)");
        Ok(ResetReceipt {
            email: email.to_string(),
            message: format!("Reset link sent to {email}"),
            requested_at: Utc::now(),
        })
    }

    /// Look up an account by username
    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn check_policy(&self, password: &str) -> AccountResult<()> {
        if password.len() < self.policy.min_length {
            return Err(AccountError::PasswordPolicy(format!(
                "password must be at least {} characters",
                self.policy.min_length
            )));
        }
        Ok(())
    }
}
