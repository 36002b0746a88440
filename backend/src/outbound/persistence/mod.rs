//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin: they translate between Diesel row structs and
//! domain types and map every Diesel or pool failure to the port's error
//! type. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module.
//!
//! # Example
//!
//! ```no_run
//! use accounts_backend::outbound::persistence::{DbPool, DieselAccountRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), accounts_backend::outbound::persistence::PoolError> {
//! let config = PoolConfig::new("postgres://localhost/accounts");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselAccountRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use migrations::{MIGRATIONS, MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
