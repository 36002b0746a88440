//! HTTP server configuration object.

use std::net::SocketAddr;

use accounts_backend::outbound::hashing::HashingCost;
use accounts_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) hashing_cost: HashingCost,
}

impl ServerConfig {
    /// Configuration listening on `bind_addr` with an in-memory store and
    /// default hashing cost.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            hashing_cost: HashingCost::default(),
        }
    }

    /// Persist accounts in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Override the Argon2 cost used for new credential hashes.
    #[must_use]
    pub fn with_hashing_cost(mut self, cost: HashingCost) -> Self {
        self.hashing_cost = cost;
        self
    }
}
