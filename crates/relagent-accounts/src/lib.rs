//! Relagent Account Directory
//!
//! Demo-grade user handling for the batch release workflow: login, forced
//! password change, signup validation, and a simulated password reset.
//!
//! Credential checks here are intentionally non-verifying: passwords are
//! plain string comparisons and no email is ever sent. The directory
//! exists to reproduce the workflow steps, not to provide security.

pub mod directory;
pub mod error;
pub mod models;

pub use directory::AccountDirectory;
pub use error::{AccountError, AccountResult};
pub use models::{Account, LoginOutcome, NewAccount, PasswordPolicy, ResetReceipt};
