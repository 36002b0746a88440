//! Argon2id implementation of the `CredentialHasher` port.
//!
//! Hashes are encoded as PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
//! so the cost parameters and salt travel with the stored value. Each call to
//! [`CredentialHasher::hash`] draws a fresh salt from the operating system.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;

use crate::domain::CredentialHash;
use crate::domain::ports::{CredentialHasher, HashingError};

/// Argon2 cost parameters.
///
/// Defaults follow the `argon2` crate's recommended values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingCost {
    /// Memory size in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Default for HashingCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2id credential hasher.
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Argon2CredentialHasher {
    /// Build a hasher with the given cost.
    ///
    /// # Errors
    ///
    /// Returns [`HashingError::InvalidParameters`] when Argon2 rejects the
    /// cost (for example zero iterations, or memory below `8 * parallelism`).
    pub fn new(cost: HashingCost) -> Result<Self, HashingError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|err| HashingError::invalid_parameters(err.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, plaintext: &str) -> Result<CredentialHash, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| HashingError::derivation(err.to_string()))?;
        Ok(CredentialHash::new(hash.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &CredentialHash) -> Result<bool, HashingError> {
        let parsed = PasswordHash::new(hash.as_str())
            .map_err(|err| HashingError::malformed_hash(err.to_string()))?;
        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(HashingError::derivation(err.to_string())),
        }
    }
}
