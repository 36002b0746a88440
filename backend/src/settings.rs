//! Server configuration loaded via OrthoConfig.
//!
//! Values are layered CLI over environment (`ACCOUNTS_*`) over config file.
//! Every field is optional; accessors apply the defaults.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::hashing::HashingCost;
use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a `host:port` socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Settings for the accounts HTTP server.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ACCOUNTS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one the server keeps accounts in
    /// memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Argon2 memory cost in KiB.
    pub hash_memory_kib: Option<u32>,
    /// Argon2 pass count.
    pub hash_iterations: Option<u32>,
    /// Argon2 lane count.
    pub hash_parallelism: Option<u32>,
}

impl ServerSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the configured value does not
    /// parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Pool configuration, present only when a database URL is configured.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url.as_deref().map(|url| {
            PoolConfig::new(url).with_max_size(
                self.db_max_connections
                    .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            )
        })
    }

    /// Argon2 cost, falling back to the crate defaults per parameter.
    pub fn hashing_cost(&self) -> HashingCost {
        let defaults = HashingCost::default();
        HashingCost {
            memory_kib: self.hash_memory_kib.unwrap_or(defaults.memory_kib),
            iterations: self.hash_iterations.unwrap_or(defaults.iterations),
            parallelism: self.hash_parallelism.unwrap_or(defaults.parallelism),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "ACCOUNTS_BIND_ADDR",
        "ACCOUNTS_DATABASE_URL",
        "ACCOUNTS_DB_MAX_CONNECTIONS",
        "ACCOUNTS_HASH_MEMORY_KIB",
        "ACCOUNTS_HASH_ITERATIONS",
        "ACCOUNTS_HASH_PARALLELISM",
    ];

    fn load() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("accounts-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load();

        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.pool_config().is_none());
        assert_eq!(settings.hashing_cost(), HashingCost::default());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ACCOUNTS_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ACCOUNTS_DATABASE_URL",
                Some("postgres://accounts@localhost/accounts".to_owned()),
            ),
            ("ACCOUNTS_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("ACCOUNTS_HASH_MEMORY_KIB", Some("1024".to_owned())),
            ("ACCOUNTS_HASH_ITERATIONS", Some("3".to_owned())),
            ("ACCOUNTS_HASH_PARALLELISM", None::<String>),
        ]);

        let settings = load();

        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
        let pool = settings.pool_config().expect("database configured");
        assert_eq!(pool.database_url(), "postgres://accounts@localhost/accounts");
        assert_eq!(pool.max_size(), 4);
        assert_eq!(
            settings.hashing_cost(),
            HashingCost {
                memory_kib: 1024,
                iterations: 3,
                parallelism: HashingCost::default().parallelism,
            }
        );
    }

    #[rstest]
    fn unparsable_bind_addr_is_reported() {
        let settings = ServerSettings {
            bind_addr: Some("localhost".to_owned()),
            ..ServerSettings::default()
        };

        let err = settings.bind_addr().expect_err("missing port");
        assert!(err.to_string().contains("\"localhost\""));
    }
}
