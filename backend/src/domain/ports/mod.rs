//! Domain ports for the hexagonal boundary.

mod account_registration;
mod account_repository;
mod credential_hasher;

#[cfg(test)]
pub use account_registration::MockAccountRegistration;
pub use account_registration::AccountRegistration;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountPersistenceError, AccountRepository};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, HashingError};
