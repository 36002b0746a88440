//! HTTP inbound adapter exposing the account registration endpoint.

pub mod accounts;
pub mod error;
pub mod state;

pub use accounts::{CreateAccountRequest, create_account};
pub use error::{ErrorBody, json_error_handler};
pub use state::HttpState;
