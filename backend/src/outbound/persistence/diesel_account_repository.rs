//! PostgreSQL-backed `AccountRepository` implementation using Diesel ORM.
//!
//! `create` is a single `INSERT ... RETURNING` statement. Uniqueness is left
//! to the `idx_users_email` unique index so concurrent registrations of the
//! same email cannot both succeed; the resulting unique violation is
//! reported as [`AccountPersistenceError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Account, AccountId, CredentialHash, NewAccount};

use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `AccountRepository` port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            AccountPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to account persistence errors.
///
/// Every unique violation on this table is a duplicate email: the primary
/// key comes from a sequence and `email` holds the only other unique index.
fn map_diesel_error(error: diesel::result::Error) -> AccountPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = ?info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => AccountPersistenceError::NotFound,
        DieselError::QueryBuilderError(_) => AccountPersistenceError::query("database query error"),
        DieselError::DatabaseError(kind, _) => match kind {
            DatabaseErrorKind::UniqueViolation => AccountPersistenceError::DuplicateEmail,
            DatabaseErrorKind::ClosedConnection => {
                AccountPersistenceError::connection("database connection error")
            }
            _ => AccountPersistenceError::query("database error"),
        },
        _ => AccountPersistenceError::query("database error"),
    }
}

fn row_to_account(row: AccountRow) -> Account {
    Account::new(
        AccountId::new(row.id),
        row.email,
        row.name,
        CredentialHash::new(row.password_hash),
        row.created_at,
    )
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn create(&self, account: &NewAccount) -> Result<Account, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewAccountRow {
            email: account.email(),
            name: account.name(),
            password_hash: account.credential_hash().as_str(),
            created_at: account.created_at(),
        };

        let row = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(AccountRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_account(row))
    }

    async fn find_by_email(&self, email: &str) -> Result<Account, AccountPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_account(row))
    }
}
