//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` and depend only on
//! domain ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::AccountRegistration;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn AccountRegistration>,
}

impl HttpState {
    /// Construct state from the registration port.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use accounts_backend::domain::AccountRegistrationService;
    /// use accounts_backend::inbound::http::state::HttpState;
    /// use accounts_backend::outbound::hashing::{Argon2CredentialHasher, HashingCost};
    /// use accounts_backend::outbound::memory::InMemoryAccountRepository;
    /// use mockable::DefaultClock;
    ///
    /// let hasher = Argon2CredentialHasher::new(HashingCost::default()).expect("default cost");
    /// let service = AccountRegistrationService::new(
    ///     Arc::new(InMemoryAccountRepository::default()),
    ///     Arc::new(hasher),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::new(Arc::new(service));
    /// let _registration = state.registration.clone();
    /// ```
    pub fn new(registration: Arc<dyn AccountRegistration>) -> Self {
        Self { registration }
    }
}
