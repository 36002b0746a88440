//! Account registration backend.
//!
//! Layers: [`domain`] (types, validation, registration service, ports),
//! [`outbound`] (PostgreSQL, in-memory, and Argon2 adapters), [`inbound`]
//! (Actix HTTP handler), plus request [`middleware`] and [`settings`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
