//! Account data model.
//!
//! An [`Account`] is created exactly once through the account store and is
//! never mutated afterwards. [`CreationRequest`] carries the caller's input
//! (including the plaintext password) and [`CreationResult`] is the
//! public-safe projection returned to callers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Store-assigned account identifier.
///
/// Serialised as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Wrap a raw identifier produced by an account store.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Salted one-way credential hash in PHC string format.
///
/// The value never leaves the domain and persistence layers: it is not
/// serialisable and its `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap an encoded hash produced by a credential hasher or read from
    /// storage.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}

/// Caller input for account creation.
///
/// The plaintext password is wiped from memory when the request is dropped.
#[derive(Clone)]
pub struct CreationRequest {
    email: String,
    name: String,
    password: Zeroizing<String>,
}

impl CreationRequest {
    /// Build a request from raw caller input. No validation happens here.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Candidate email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Candidate display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Plaintext password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Split the request into email, name, and the still-zeroizing password.
    pub(crate) fn into_parts(self) -> (String, String, Zeroizing<String>) {
        let Self {
            email,
            name,
            password,
        } = self;
        (email, name, password)
    }
}

impl fmt::Debug for CreationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreationRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account ready to be persisted; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    email: String,
    name: String,
    credential_hash: CredentialHash,
    created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Assemble an account from validated components.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        credential_hash: CredentialHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            credential_hash,
            created_at,
        }
    }

    /// Unique email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Derived credential hash.
    pub fn credential_hash(&self) -> &CredentialHash {
        &self.credential_hash
    }

    /// Server-assigned creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attach the identifier assigned by a store.
    pub fn into_account(self, id: AccountId) -> Account {
        let Self {
            email,
            name,
            credential_hash,
            created_at,
        } = self;
        Account {
            id,
            email,
            name,
            credential_hash,
            created_at,
        }
    }
}

/// Persisted account record.
///
/// ## Invariants
/// - `email` is unique across all accounts.
/// - `id` and `created_at` never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    email: String,
    name: String,
    credential_hash: CredentialHash,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Rebuild an account from stored components.
    pub fn new(
        id: AccountId,
        email: impl Into<String>,
        name: impl Into<String>,
        credential_hash: CredentialHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            name: name.into(),
            credential_hash,
            created_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Unique email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Stored credential hash.
    pub fn credential_hash(&self) -> &CredentialHash {
        &self.credential_hash
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Public view of a newly created account.
///
/// Example JSON:
/// `{"id":1,"email":"ada@example.com","name":"Ada","createdAt":"2025-01-01T00:00:00Z"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreationResult {
    #[schema(value_type = i64, example = 1)]
    pub id: AccountId,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(value_type = String, example = "2025-01-01T00:00:00Z")]
    pub created_at: DateTime<Utc>,
}

impl From<Account> for CreationResult {
    fn from(value: Account) -> Self {
        let Account {
            id,
            email,
            name,
            created_at,
            ..
        } = value;
        Self {
            id,
            email,
            name,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    #[fixture]
    fn stored_account() -> Account {
        let created_at = Utc
            .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        NewAccount::new(
            "ada@example.com",
            "Ada",
            CredentialHash::new("$argon2id$v=19$m=8,t=1,p=1$c2FsdA$aGFzaA"),
            created_at,
        )
        .into_account(AccountId::new(7))
    }

    #[rstest]
    fn creation_result_serialises_public_fields_only(stored_account: Account) {
        let value = serde_json::to_value(CreationResult::from(stored_account)).expect("json");

        assert_eq!(
            value,
            json!({
                "id": 7,
                "email": "ada@example.com",
                "name": "Ada",
                "createdAt": "2025-03-01T12:00:00Z",
            })
        );
        let object = value.as_object().expect("object");
        assert!(object.keys().all(|key| !key.contains("password")));
        assert!(
            object
                .values()
                .filter_map(Value::as_str)
                .all(|text| !text.starts_with("$argon2"))
        );
    }

    #[rstest]
    fn debug_output_redacts_secrets(stored_account: Account) {
        let request = CreationRequest::new("ada@example.com", "Ada", "hunter2hunter2");

        assert!(!format!("{request:?}").contains("hunter2"));
        assert!(!format!("{stored_account:?}").contains("argon2id"));
    }

    #[rstest]
    fn into_parts_keeps_every_field() {
        let request = CreationRequest::new("ada@example.com", "Ada", "supersecret");

        let (email, name, password) = request.into_parts();

        assert_eq!(email, "ada@example.com");
        assert_eq!(name, "Ada");
        assert_eq!(password.as_str(), "supersecret");
    }
}
