//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed account store using Diesel ORM
//! - **memory**: process-local account store for tests and database-less runs
//! - **hashing**: Argon2id credential hasher
//!
//! Adapters are thin translators between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod hashing;
pub mod memory;
pub mod persistence;
