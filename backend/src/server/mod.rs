//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use accounts_backend::Trace;
#[cfg(debug_assertions)]
use accounts_backend::doc::ApiDoc;
use accounts_backend::domain::AccountRegistrationService;
use accounts_backend::domain::ports::AccountRegistration;
use accounts_backend::inbound::http::{HttpState, create_account, json_error_handler};
use accounts_backend::outbound::hashing::Argon2CredentialHasher;
use accounts_backend::outbound::memory::InMemoryAccountRepository;
use accounts_backend::outbound::persistence::DieselAccountRepository;

/// Build the registration service over the configured account store.
///
/// Uses PostgreSQL when a pool is configured and the in-memory store
/// otherwise.
///
/// # Errors
/// Returns [`std::io::Error`] when the hashing cost is rejected.
fn build_registration(config: &ServerConfig) -> std::io::Result<Arc<dyn AccountRegistration>> {
    let hasher = Arc::new(
        Argon2CredentialHasher::new(config.hashing_cost)
            .map_err(|err| std::io::Error::other(format!("invalid hashing cost: {err}")))?,
    );
    let clock = Arc::new(DefaultClock);

    Ok(match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL account store");
            Arc::new(AccountRegistrationService::new(
                Arc::new(DieselAccountRepository::new(pool.clone())),
                hasher,
                clock,
            ))
        }
        None => {
            warn!("no database configured; accounts are kept in memory and lost on restart");
            Arc::new(AccountRegistrationService::new(
                Arc::new(InMemoryAccountRepository::default()),
                hasher,
                clock,
            ))
        }
    })
}

/// Shared handler state for every worker.
///
/// # Errors
/// Returns [`std::io::Error`] when the hashing cost is rejected.
pub fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    Ok(web::Data::new(HttpState::new(build_registration(config)?)))
}

/// Assemble the application for one worker.
pub fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(create_account);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from `config`.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the hasher cannot be built or the
/// socket cannot be bound.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config)?;

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    info!(addr = %config.bind_addr, "accounts server listening");
    Ok(server)
}
