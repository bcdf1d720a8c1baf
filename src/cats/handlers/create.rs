//! Create Cat Handler

use std::sync::Arc;

use jiff::civil::Date;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    cats::errors::into_status_error,
    cats::models::{CatUuid, NewCat},
    extensions::*,
    state::State,
    validation::{self, FieldError},
};

/// Create Cat Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCatRequest {
    pub name: String,
    /// One of `M`, `F` or `O`
    pub gender: String,
    /// ISO date (YYYY-MM-DD), not in the future
    pub date_of_birth: String,
    #[serde(default)]
    pub description: String,
    /// The cat's breed
    pub breed_uuid: Uuid,
    /// The human who owns this cat
    pub owner_uuid: Uuid,
}

impl CreateCatRequest {
    fn into_new_cat(self, today: Date) -> Result<NewCat, FieldError> {
        validation::required_text("name", &self.name, validation::MAX_NAME_CHARS)?;
        validation::capped_text(
            "description",
            &self.description,
            validation::MAX_DESCRIPTION_CHARS,
        )?;

        let gender = validation::parse_gender(&self.gender)?;
        let date_of_birth = validation::parse_birth_date(&self.date_of_birth, today)?;

        Ok(NewCat {
            uuid: CatUuid::new(),
            name: self.name,
            gender,
            date_of_birth,
            description: self.description,
            breed_uuid: self.breed_uuid.into(),
            owner_uuid: self.owner_uuid.into(),
        })
    }
}

/// Cat Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CatCreatedResponse {
    /// Created cat UUID
    pub uuid: Uuid,
}

/// Create Cat Handler
#[endpoint(
    tags("cats"),
    summary = "Create Cat",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cat created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCatRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CatCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let new_cat = json
        .into_inner()
        .into_new_cat(jiff::Zoned::now().date())
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let uuid = state
        .cats
        .create_cat(new_cat)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/cats/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CatCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}
