//! Account registration domain service.
//!
//! Orchestrates validation, credential hashing, and uniqueness-enforced
//! persistence. Validation and hashing perform no I/O, so a failure in
//! either leaves no persisted state. Hashing runs on the runtime's blocking
//! pool.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AccountPersistenceError, AccountRegistration, AccountRepository, CredentialHasher,
};
use crate::domain::{
    AccountValidationError, CreationRequest, CreationResult, CredentialHash, NewAccount,
    validate_creation,
};

/// Outcomes of a failed registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The request broke a validation rule.
    #[error(transparent)]
    Validation(#[from] AccountValidationError),
    /// An account with the requested email already exists.
    #[error("email exists")]
    DuplicateEmail,
    /// Hashing or storage failed for reasons unrelated to caller input.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl RegistrationError {
    /// Create an internal error carrying diagnostic detail for logs.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

fn map_persistence_error(error: AccountPersistenceError) -> RegistrationError {
    match error {
        AccountPersistenceError::DuplicateEmail => RegistrationError::DuplicateEmail,
        other => {
            debug!(error = %other, "account store rejected registration");
            RegistrationError::internal(other.to_string())
        }
    }
}

/// Registration service implementing the [`AccountRegistration`] port.
#[derive(Clone)]
pub struct AccountRegistrationService<R, H> {
    accounts: Arc<R>,
    hasher: Arc<H>,
    clock: Arc<dyn Clock>,
}

impl<R, H> AccountRegistrationService<R, H>
where
    H: CredentialHasher + 'static,
{
    /// Hash `password` on the blocking pool. The plaintext is wiped once the
    /// blocking task drops it.
    async fn hash_off_worker(
        &self,
        password: Zeroizing<String>,
    ) -> Result<CredentialHash, RegistrationError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| {
                debug!(error = %err, "credential hashing task did not complete");
                RegistrationError::internal(format!("credential hashing task failed: {err}"))
            })?
            .map_err(|err| {
                debug!(error = %err, "credential hashing failed");
                RegistrationError::internal(err.to_string())
            })
    }
}

impl<R, H> AccountRegistrationService<R, H> {
    /// Create a service over an account store, a hasher, and a clock.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use accounts_backend::domain::AccountRegistrationService;
    /// # use accounts_backend::outbound::hashing::{Argon2CredentialHasher, HashingCost};
    /// # use accounts_backend::outbound::memory::InMemoryAccountRepository;
    /// # use mockable::DefaultClock;
    /// let hasher = Argon2CredentialHasher::new(HashingCost::default()).expect("default cost");
    /// let service = AccountRegistrationService::new(
    ///     Arc::new(InMemoryAccountRepository::default()),
    ///     Arc::new(hasher),
    ///     Arc::new(DefaultClock),
    /// );
    /// ```
    pub fn new(accounts: Arc<R>, hasher: Arc<H>, clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts,
            hasher,
            clock,
        }
    }
}

#[async_trait]
impl<R, H> AccountRegistration for AccountRegistrationService<R, H>
where
    R: AccountRepository,
    H: CredentialHasher + 'static,
{
    async fn register(
        &self,
        request: CreationRequest,
    ) -> Result<CreationResult, RegistrationError> {
        validate_creation(&request)?;

        let (email, name, password) = request.into_parts();
        let credential_hash = self.hash_off_worker(password).await?;

        let new_account = NewAccount::new(email, name, credential_hash, self.clock.utc());

        let account = self
            .accounts
            .create(&new_account)
            .await
            .map_err(map_persistence_error)?;

        info!(account_id = %account.id(), "account registered");
        Ok(CreationResult::from(account))
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
