//! Structural validation for account creation requests.
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. the display name must be non-empty;
//! 2. the email must be at least [`EMAIL_MIN_LENGTH`] characters and contain
//!    an `@`;
//! 3. the password must be at least [`PASSWORD_MIN_LENGTH`] characters.
//!
//! The email rule is a minimal syntactic check, not RFC 5322 validation.
//!
//! Lengths count Unicode scalar values, not UTF-8 bytes. A byte-counting
//! check would accept `"ääääääá"` (7 characters, 14 bytes) as a password;
//! this one answers `400 password must be at least 8 chars`.

use crate::domain::CreationRequest;

/// Minimum number of characters in an email address.
pub const EMAIL_MIN_LENGTH: usize = 3;
/// Minimum number of characters in a plaintext password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Validation failures for [`CreationRequest`].
///
/// `Display` yields the message returned to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    /// The display name is empty.
    #[error("name is required")]
    EmptyName,
    /// The email is too short or lacks an `@`.
    #[error("invalid email")]
    InvalidEmail,
    /// The password is shorter than [`PASSWORD_MIN_LENGTH`].
    #[error("password must be at least 8 chars")]
    WeakPassword,
}

/// Check a creation request, returning the first rule it breaks.
///
/// # Examples
/// ```
/// use accounts_backend::domain::{AccountValidationError, CreationRequest, validate_creation};
///
/// let request = CreationRequest::new("bad", "x", "12345678");
/// assert_eq!(
///     validate_creation(&request),
///     Err(AccountValidationError::InvalidEmail)
/// );
/// ```
pub fn validate_creation(request: &CreationRequest) -> Result<(), AccountValidationError> {
    if request.name().is_empty() {
        return Err(AccountValidationError::EmptyName);
    }

    let email = request.email();
    if email.chars().count() < EMAIL_MIN_LENGTH || !email.contains('@') {
        return Err(AccountValidationError::InvalidEmail);
    }

    if request.password().chars().count() < PASSWORD_MIN_LENGTH {
        return Err(AccountValidationError::WeakPassword);
    }

    Ok(())
}
