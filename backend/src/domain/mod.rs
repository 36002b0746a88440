//! Domain primitives, services, and ports.
//!
//! Purpose: define the account types, the creation validator, and the
//! registration service. Nothing here depends on HTTP or on a concrete
//! database; adapters plug in through [`ports`].
//!
//! Public surface:
//! - Account, NewAccount, CreationRequest, CreationResult: account model.
//! - validate_creation / AccountValidationError: structural checks.
//! - AccountRegistrationService / RegistrationError: the creation pipeline.

pub mod account;
pub mod account_validation;
pub mod ports;
pub mod registration;

pub use self::account::{
    Account, AccountId, CreationRequest, CreationResult, CredentialHash, NewAccount,
};
pub use self::account_validation::{
    AccountValidationError, EMAIL_MIN_LENGTH, PASSWORD_MIN_LENGTH, validate_creation,
};
pub use self::registration::{AccountRegistrationService, RegistrationError};
