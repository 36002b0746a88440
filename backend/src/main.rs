//! Accounts server entry-point: loads settings, prepares storage, and serves
//! the registration API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use accounts_backend::outbound::persistence::{DbPool, apply_migrations};
use accounts_backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr).with_hashing_cost(settings.hashing_cost());

    if let Some(pool_config) = settings.pool_config() {
        let url = pool_config.database_url().to_owned();
        web::block(move || apply_migrations(&url))
            .await
            .map_err(std::io::Error::other)?
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await
}
