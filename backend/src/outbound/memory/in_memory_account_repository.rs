//! In-memory `AccountRepository` implementation.
//!
//! The duplicate check and the insert run under a single lock acquisition,
//! so this store keeps the same uniqueness guarantee as the database index
//! when requests race. State is lost when the process exits.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Account, AccountId, NewAccount};

#[derive(Debug)]
struct Accounts {
    next_id: i64,
    by_email: HashMap<String, Account>,
}

impl Default for Accounts {
    fn default() -> Self {
        Self {
            next_id: 1,
            by_email: HashMap::new(),
        }
    }
}

/// Account store backed by a mutex-guarded map keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Accounts>,
}

impl InMemoryAccountRepository {
    /// Number of stored accounts.
    pub fn len(&self) -> Result<usize, AccountPersistenceError> {
        Ok(self.lock()?.by_email.len())
    }

    /// Whether no account has been stored yet.
    pub fn is_empty(&self) -> Result<bool, AccountPersistenceError> {
        Ok(self.lock()?.by_email.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Accounts>, AccountPersistenceError> {
        self.accounts
            .lock()
            .map_err(|_| AccountPersistenceError::query("account store lock poisoned"))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError> {
        let mut accounts = self.lock()?;
        if accounts.by_email.contains_key(account.email()) {
            debug!("in-memory account store rejected duplicate email");
            return Err(AccountPersistenceError::DuplicateEmail);
        }

        let id = AccountId::new(accounts.next_id);
        accounts.next_id += 1;
        let stored = account.clone().into_account(id);
        accounts
            .by_email
            .insert(stored.email().to_owned(), stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, AccountPersistenceError> {
        self.lock()?
            .by_email
            .get(email)
            .cloned()
            .ok_or(AccountPersistenceError::NotFound)
    }
}
