//! Port for deriving and checking salted credential hashes.

use crate::domain::CredentialHash;

/// Errors raised by credential hasher adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashingError {
    /// The configured cost parameters were rejected by the primitive.
    #[error("credential hasher parameters rejected: {message}")]
    InvalidParameters { message: String },
    /// The primitive failed while deriving a hash.
    #[error("credential hashing failed: {message}")]
    Derivation { message: String },
    /// A stored hash could not be parsed.
    #[error("stored credential hash is malformed: {message}")]
    MalformedHash { message: String },
}

impl HashingError {
    /// Create a parameter rejection error.
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a derivation failure.
    pub fn derivation(message: impl Into<String>) -> Self {
        Self::Derivation {
            message: message.into(),
        }
    }

    /// Create a malformed hash error.
    pub fn malformed_hash(message: impl Into<String>) -> Self {
        Self::MalformedHash {
            message: message.into(),
        }
    }
}

/// Slow, salted, one-way credential hashing.
///
/// Hashing the same plaintext twice yields different encodings (fresh salt
/// per call), yet both verify against that plaintext.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derive a hash for the plaintext secret.
    fn hash(&self, plaintext: &str) -> Result<CredentialHash, HashingError>;

    /// Check a plaintext secret against a stored hash.
    ///
    /// Returns `Ok(false)` when the secret does not match.
    fn verify(&self, plaintext: &str, hash: &CredentialHash) -> Result<bool, HashingError>;
}
