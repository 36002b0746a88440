//! HTTP adapter mapping for registration outcomes.
//!
//! Purpose: keep the domain error types HTTP-agnostic while giving Actix
//! handlers a single, exhaustive translation into status codes and the
//! `{"error": "..."}` response body. Internal failure detail is logged here
//! and never written to the response.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::RegistrationError;
use crate::middleware::trace::TraceId;

/// Body returned when a payload cannot be decoded.
pub const INVALID_JSON_MESSAGE: &str = "invalid JSON";
/// Body returned for duplicate registrations.
pub const EMAIL_EXISTS_MESSAGE: &str = "email exists";
/// Body returned for every failure not caused by caller input.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Error response body.
///
/// Example JSON: `{"error":"invalid email"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "invalid email")]
    pub error: String,
}

impl ErrorBody {
    /// Build a body carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

fn public_message(error: &RegistrationError) -> String {
    match error {
        RegistrationError::Validation(validation) => validation.to_string(),
        RegistrationError::DuplicateEmail => EMAIL_EXISTS_MESSAGE.to_owned(),
        RegistrationError::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_owned(),
    }
}

impl ResponseError for RegistrationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Self::Internal { message } = self {
            let trace_id = TraceId::current().map(|id| id.to_string());
            error!(trace_id = ?trace_id, %message, "account registration failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody::new(public_message(self)))
    }
}

/// `JsonConfig` error handler answering every decoding failure with
/// `400 {"error":"invalid JSON"}`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use accounts_backend::inbound::http::error::json_error_handler;
///
/// let app = App::new().app_data(web::JsonConfig::default().error_handler(json_error_handler));
/// ```
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected undecodable request body");
    let response = HttpResponse::BadRequest().json(ErrorBody::new(INVALID_JSON_MESSAGE));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountValidationError;
    use actix_web::body::to_bytes;
    use rstest::rstest;

    async fn body_of(error: RegistrationError) -> (StatusCode, ErrorBody) {
        let response = ResponseError::error_response(&error);
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: ErrorBody = serde_json::from_slice(&bytes).expect("error body");
        (status, body)
    }

    #[rstest]
    #[case(AccountValidationError::EmptyName, "name is required")]
    #[case(AccountValidationError::InvalidEmail, "invalid email")]
    #[case(
        AccountValidationError::WeakPassword,
        "password must be at least 8 chars"
    )]
    #[actix_web::test]
    async fn validation_errors_return_bad_request_with_specific_message(
        #[case] validation: AccountValidationError,
        #[case] message: &str,
    ) {
        let (status, body) = body_of(RegistrationError::Validation(validation)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, ErrorBody::new(message));
    }

    #[actix_web::test]
    async fn duplicate_email_returns_conflict() {
        let (status, body) = body_of(RegistrationError::DuplicateEmail).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, ErrorBody::new("email exists"));
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let (status, body) = body_of(RegistrationError::internal(
            "account repository query failed: relation \"users\" does not exist",
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, ErrorBody::new("internal error"));
    }
}
