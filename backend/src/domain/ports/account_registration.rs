//! Driving port for the account registration use-case.
//!
//! Inbound adapters call this port to create accounts without knowing which
//! store or hasher backs it, so handler tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{CreationRequest, CreationResult, RegistrationError};

/// Domain use-case port for account creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRegistration: Send + Sync {
    /// Validate, hash, and persist a new account.
    async fn register(&self, request: CreationRequest)
    -> Result<CreationResult, RegistrationError>;
}
