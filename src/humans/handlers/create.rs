//! Create Human Handler

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
    extensions::*,
    humans::errors::into_status_error,
    humans::models::{HumanUuid, NewHuman},
    state::State,
    validation::{self, FieldError},
};

/// Create Human Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateHumanRequest {
    pub name: String,
    /// One of `M`, `F` or `O`
    pub gender: String,
    /// ISO date (YYYY-MM-DD), not in the future
    pub date_of_birth: String,
    #[serde(default)]
    pub description: String,
    /// The home this human lives in
    pub home_uuid: Uuid,
}

impl CreateHumanRequest {
    fn into_new_human(self, today: Date) -> Result<NewHuman, FieldError> {
        validation::required_text("name", &self.name, validation::MAX_NAME_CHARS)?;
        validation::capped_text(
            "description",
            &self.description,
            validation::MAX_DESCRIPTION_CHARS,
        )?;

        let gender = validation::parse_gender(&self.gender)?;
        let date_of_birth = validation::parse_birth_date(&self.date_of_birth, today)?;

        Ok(NewHuman {
            uuid: HumanUuid::new(),
            name: self.name,
            gender,
            date_of_birth,
            description: self.description,
            home_uuid: self.home_uuid.into(),
        })
    }
}

/// Human Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HumanCreatedResponse {
    /// Created human UUID
    pub uuid: Uuid,
}

/// Create Human Handler
#[endpoint(
    tags("humans"),
    summary = "Create Human",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Human created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateHumanRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HumanCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let new_human = json
        .into_inner()
        .into_new_human(jiff::Zoned::now().date())
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let uuid = state
        .humans
        .create_human(new_human)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/humans/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(HumanCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}
