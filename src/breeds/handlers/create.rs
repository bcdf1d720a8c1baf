//! Create Breed Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    breeds::errors::into_status_error,
    breeds::models::{BreedUuid, NewBreed},
    extensions::*,
    state::State,
    validation::{self, FieldError},
};

/// Create Breed Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBreedRequest {
    /// Must be unique across breeds
    pub name: String,
    pub origin: String,
    #[serde(default)]
    pub description: String,
}

impl CreateBreedRequest {
    fn into_new_breed(self) -> Result<NewBreed, FieldError> {
        validation::required_text("name", &self.name, validation::MAX_NAME_CHARS)?;
        validation::required_text("origin", &self.origin, validation::MAX_ORIGIN_CHARS)?;
        validation::capped_text(
            "description",
            &self.description,
            validation::MAX_DESCRIPTION_CHARS,
        )?;

        Ok(NewBreed {
            uuid: BreedUuid::new(),
            name: self.name,
            origin: self.origin,
            description: self.description,
        })
    }
}

/// Breed Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BreedCreatedResponse {
    /// Created breed UUID
    pub uuid: Uuid,
}

/// Create Breed Handler
#[endpoint(
    tags("breeds"),
    summary = "Create Breed",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Breed created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Breed name already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBreedRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BreedCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let new_breed = json
        .into_inner()
        .into_new_breed()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let uuid = state
        .breeds
        .create_breed(new_breed)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/breeds/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(BreedCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        breeds::repository::{BreedsRepositoryError, MockBreedsRepository},
        test_helpers::breeds_service,
    };

    use super::*;

    fn make_service(repo: MockBreedsRepository) -> Service {
        breeds_service(repo, Router::with_path("breeds").post(handler))
    }

    #[tokio::test]
    async fn test_create_breed_success() -> TestResult {
        let mut repo = MockBreedsRepository::new();

        repo.expect_create_breed()
            .once()
            .withf(|new| {
                new.name == "Siberian" && new.origin == "Russia" && new.description.is_empty()
            })
            .return_once(|new| {
                Ok(crate::breeds::models::Breed {
                    uuid: new.uuid,
                    name: new.name,
                    origin: new.origin,
                    description: new.description,
                })
            });

        let mut res = TestClient::post("http://example.com/breeds")
            .json(&json!({ "name": "Siberian", "origin": "Russia" }))
            .send(&make_service(repo))
            .await;

        let body: BreedCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/breeds/{}", body.uuid).as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_name_returns_409() -> TestResult {
        let mut repo = MockBreedsRepository::new();

        repo.expect_create_breed()
            .once()
            .return_once(|_| Err(BreedsRepositoryError::AlreadyExists));

        let res = TestClient::post("http://example.com/breeds")
            .json(&json!({ "name": "Siberian", "origin": "Russia" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_breed_blank_origin_returns_400() -> TestResult {
        let mut repo = MockBreedsRepository::new();

        repo.expect_create_breed().never();

        let mut res = TestClient::post("http://example.com/breeds")
            .json(&json!({ "name": "Siberian", "origin": "" }))
            .send(&make_service(repo))
            .await;

        let body = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(body.contains("origin"), "error should name the field: {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_breed_long_description_returns_400() -> TestResult {
        let mut repo = MockBreedsRepository::new();

        repo.expect_create_breed().never();

        let res = TestClient::post("http://example.com/breeds")
            .json(&json!({
                "name": "Siberian",
                "origin": "Russia",
                "description": "x".repeat(301)
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
