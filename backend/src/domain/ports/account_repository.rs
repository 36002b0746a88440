//! Port abstraction for account persistence adapters and their errors.
//!
//! Adapters must enforce email uniqueness atomically at the storage layer
//! and report any duplicate-key condition as
//! [`AccountPersistenceError::DuplicateEmail`]. Callers never observe raw
//! storage error codes.

use async_trait::async_trait;

use crate::domain::{Account, NewAccount};

/// Persistence errors raised by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountPersistenceError {
    /// Another account already uses this email.
    #[error("account email already exists")]
    DuplicateEmail,
    /// No account matched the lookup.
    #[error("account not found")]
    NotFound,
    /// Repository connection could not be established.
    #[error("account repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("account repository query failed: {message}")]
    Query { message: String },
}

impl AccountPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Account store port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account, assigning its identifier.
    ///
    /// The uniqueness check and the insert are a single atomic operation in
    /// the backing store.
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError>;

    /// Fetch an account by its exact (case-sensitive) email.
    async fn find_by_email(&self, email: &str) -> Result<Account, AccountPersistenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn constructors_accept_str_messages() {
        assert_eq!(
            AccountPersistenceError::connection("refused").to_string(),
            "account repository connection failed: refused"
        );
        assert_eq!(
            AccountPersistenceError::query("syntax").to_string(),
            "account repository query failed: syntax"
        );
    }
}
