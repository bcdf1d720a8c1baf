//! Obtain Token Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{auth::errors::AuthError, extensions::*, state::State};

/// Obtain Token Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ObtainTokenRequest {
    pub username: String,
    pub password: String,
}

/// Obtain Token Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TokenResponse {
    /// The bearer key to present on write requests
    pub token: String,
}

/// Obtain Token Handler
///
/// Verifies a username/password pair and returns the principal's bearer
/// token, renewing it transparently when the stored one has expired.
#[endpoint(
    tags("auth"),
    summary = "Obtain Auth Token",
    responses(
        (status_code = StatusCode::OK, description = "Token issued"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid credentials"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ObtainTokenRequest>,
    depot: &mut Depot,
) -> Result<Json<TokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let token = state
        .tokens
        .issue_or_renew(
            state.auth.as_ref(),
            &request.username,
            &request.password,
            Timestamp::now(),
        )
        .await
        .map_err(|error| match error {
            AuthError::InvalidCredentials => {
                StatusError::bad_request().brief("Unable to log in with provided credentials")
            }
            other => {
                error!("failed to issue token: {other}");

                StatusError::internal_server_error()
            }
        })?;

    Ok(Json(TokenResponse { token: token.key }))
}

#[cfg(test)]
mod tests {
    use jiff::SignedDuration;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        auth::{
            models::{AuthToken, User, UserUuid},
            repository::MockAuthRepository,
        },
        test_helpers::auth_service,
    };

    use super::*;

    fn make_service(auth: MockAuthRepository) -> Service {
        auth_service(auth, Router::with_path("auth/token").post(handler))
    }

    fn make_user(uuid: UserUuid) -> User {
        User {
            uuid,
            username: "alice".to_string(),
            password_hash: bcrypt::hash("hunter2", 4).unwrap_or_default(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_obtain_token_success() -> TestResult {
        let user_uuid = UserUuid::new();

        let mut auth = MockAuthRepository::new();

        auth.expect_find_user_by_username()
            .once()
            .withf(|username| username == "alice")
            .return_once(move |_| Ok(Some(make_user(user_uuid))));
        auth.expect_find_token_by_user()
            .once()
            .return_once(|_| Ok(None));
        auth.expect_create_token().once().return_once(|new| {
            Ok(AuthToken {
                key: new.key,
                user_uuid: new.user_uuid,
                created_at: new.created_at,
            })
        });

        let mut res = TestClient::post("http://example.com/auth/token")
            .json(&json!({ "username": "alice", "password": "hunter2" }))
            .send(&make_service(auth))
            .await;

        let body: TokenResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.token.len(), 40);

        Ok(())
    }

    #[tokio::test]
    async fn test_obtain_token_reuses_fresh_token() -> TestResult {
        let user_uuid = UserUuid::new();
        let existing = AuthToken {
            key: "b".repeat(40),
            user_uuid,
            created_at: jiff::Timestamp::now() - SignedDuration::from_hours(1),
        };

        let mut auth = MockAuthRepository::new();

        auth.expect_find_user_by_username()
            .once()
            .return_once(move |_| Ok(Some(make_user(user_uuid))));
        let found = existing.clone();
        auth.expect_find_token_by_user()
            .once()
            .return_once(move |_| Ok(Some(found)));
        auth.expect_create_token().never();
        auth.expect_delete_token().never();

        let mut res = TestClient::post("http://example.com/auth/token")
            .json(&json!({ "username": "alice", "password": "hunter2" }))
            .send(&make_service(auth))
            .await;

        let body: TokenResponse = res.take_json().await?;

        assert_eq!(body.token, existing.key);

        Ok(())
    }

    #[tokio::test]
    async fn test_obtain_token_bad_password_returns_400() -> TestResult {
        let user_uuid = UserUuid::new();

        let mut auth = MockAuthRepository::new();

        auth.expect_find_user_by_username()
            .once()
            .return_once(move |_| Ok(Some(make_user(user_uuid))));
        auth.expect_find_token_by_user().never();
        auth.expect_create_token().never();

        let res = TestClient::post("http://example.com/auth/token")
            .json(&json!({ "username": "alice", "password": "wrong" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_obtain_token_unknown_user_returns_400() -> TestResult {
        let mut auth = MockAuthRepository::new();

        auth.expect_find_user_by_username()
            .once()
            .return_once(|_| Ok(None));
        auth.expect_create_token().never();

        let res = TestClient::post("http://example.com/auth/token")
            .json(&json!({ "username": "nobody", "password": "hunter2" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
