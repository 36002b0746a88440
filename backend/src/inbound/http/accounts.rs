//! Account registration handler.
//!
//! ```text
//! POST /users {"email":"ada@example.com","name":"Ada","password":"verystrong"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{CreationRequest, CreationResult, RegistrationError};
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
///
/// Absent fields decode as empty strings so they reach validation instead
/// of failing decoding. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct CreateAccountRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "verystrong")]
    pub password: String,
}

impl From<CreateAccountRequest> for CreationRequest {
    fn from(value: CreateAccountRequest) -> Self {
        let CreateAccountRequest {
            email,
            name,
            password,
        } = value;
        Self::new(email, name, password)
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = CreationResult),
        (status = 400, description = "Malformed body or invalid field", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["accounts"],
    operation_id = "createAccount"
)]
#[post("/users")]
pub async fn create_account(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, RegistrationError> {
    let result = state
        .registration
        .register(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockAccountRegistration;
    use crate::domain::{AccountId, AccountValidationError};
    use crate::inbound::http::error::json_error_handler;
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test as actix_test};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app(
        registration: MockAccountRegistration,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(HttpState::new(Arc::new(registration))))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(create_account)
    }

    fn echoing_registration() -> MockAccountRegistration {
        let mut registration = MockAccountRegistration::new();
        registration.expect_register().returning(|request| {
            Ok(CreationResult {
                id: AccountId::new(1),
                email: request.email().to_owned(),
                name: request.name().to_owned(),
                created_at: Utc
                    .with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
                    .single()
                    .expect("valid timestamp"),
            })
        });
        registration
    }

    fn failing_registration(error: RegistrationError) -> MockAccountRegistration {
        let mut registration = MockAccountRegistration::new();
        registration
            .expect_register()
            .times(1)
            .returning(move |_| Err(error.clone()));
        registration
    }

    async fn post_raw(
        registration: MockAccountRegistration,
        body: &'static str,
    ) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(registration)).await;
        let request = actix_test::TestRequest::post()
            .uri("/users")
            .insert_header(ContentType::json())
            .set_payload(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("json body");
        (status, value)
    }

    #[actix_web::test]
    async fn create_account_returns_created_with_public_fields() {
        let (status, body) = post_raw(
            echoing_registration(),
            r#"{"email":"ok@ex.com","name":"Ok","password":"verystrong"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "email": "ok@ex.com",
                "name": "Ok",
                "createdAt": "2025-01-02T03:04:05Z",
            })
        );
    }

    #[actix_web::test]
    async fn create_account_passes_decoded_fields_to_the_service() {
        let mut registration = MockAccountRegistration::new();
        registration
            .expect_register()
            .withf(|request: &CreationRequest| {
                request.email() == "a@b.com"
                    && request.name() == "Alice"
                    && request.password() == "supersecret"
            })
            .times(1)
            .returning(|_| Err(RegistrationError::DuplicateEmail));

        let (status, _) = post_raw(
            registration,
            r#"{"email":"a@b.com","name":"Alice","password":"supersecret","role":"admin"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[rstest]
    #[case(r#"{"email":"ok@ex.com","name":"#)]
    #[case("not json")]
    #[case(r#"{"email":42,"name":"Ok","password":"verystrong"}"#)]
    #[case(r#"["ok@ex.com","Ok","verystrong"]"#)]
    #[actix_web::test]
    async fn malformed_bodies_return_invalid_json(#[case] body: &'static str) {
        let mut registration = MockAccountRegistration::new();
        registration.expect_register().never();

        let (status, value) = post_raw(registration, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value, json!({ "error": "invalid JSON" }));
    }

    #[actix_web::test]
    async fn non_json_content_type_returns_invalid_json() {
        let mut registration = MockAccountRegistration::new();
        registration.expect_register().never();
        let app = actix_test::init_service(test_app(registration)).await;

        let request = actix_test::TestRequest::post()
            .uri("/users")
            .insert_header(ContentType::plaintext())
            .set_payload(r#"{"email":"ok@ex.com","name":"Ok","password":"verystrong"}"#)
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(value, json!({ "error": "invalid JSON" }));
    }

    #[actix_web::test]
    async fn missing_fields_reach_validation() {
        let mut registration = MockAccountRegistration::new();
        registration
            .expect_register()
            .withf(|request: &CreationRequest| {
                request.email().is_empty() && request.name().is_empty()
            })
            .times(1)
            .returning(|_| {
                Err(RegistrationError::Validation(AccountValidationError::EmptyName))
            });

        let (status, value) = post_raw(registration, "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value, json!({ "error": "name is required" }));
    }

    #[rstest]
    #[case(
        RegistrationError::Validation(AccountValidationError::InvalidEmail),
        StatusCode::BAD_REQUEST,
        "invalid email"
    )]
    #[case(
        RegistrationError::Validation(AccountValidationError::WeakPassword),
        StatusCode::BAD_REQUEST,
        "password must be at least 8 chars"
    )]
    #[case(RegistrationError::DuplicateEmail, StatusCode::CONFLICT, "email exists")]
    #[case(
        RegistrationError::internal("pool exhausted"),
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal error"
    )]
    #[actix_web::test]
    async fn service_outcomes_map_to_status_and_message(
        #[case] error: RegistrationError,
        #[case] expected_status: StatusCode,
        #[case] expected_message: &str,
    ) {
        let (status, value) = post_raw(
            failing_registration(error),
            r#"{"email":"bad","name":"x","password":"12345678"}"#,
        )
        .await;

        assert_eq!(status, expected_status);
        assert_eq!(value, json!({ "error": expected_message }));
    }
}
