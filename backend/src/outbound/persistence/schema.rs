//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered accounts.
    ///
    /// `email` carries the unique index `idx_users_email`; it is the only
    /// guard against duplicate registrations.
    users (id) {
        /// Primary key assigned by the `BIGSERIAL` sequence.
        id -> Int8,
        /// Unique email address (case-sensitive as stored).
        email -> Varchar,
        /// Display name.
        name -> Varchar,
        /// PHC-format credential hash.
        password_hash -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
