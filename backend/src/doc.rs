//! OpenAPI documentation for the accounts API.
//!
//! Served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::CreationResult;
use crate::inbound::http::{CreateAccountRequest, ErrorBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Accounts API",
        description = "Account registration with unique email addresses."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::accounts::create_account),
    components(schemas(CreateAccountRequest, CreationResult, ErrorBody)),
    tags(
        (name = "accounts", description = "Account registration")
    )
)]
pub struct ApiDoc;
