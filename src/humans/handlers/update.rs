//! Update Human Handler
//!
//! Serves both PUT and PATCH: absent fields are left unchanged.

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    humans::errors::into_status_error,
    humans::models::HumanUpdate,
    state::State,
    validation::{self, FieldError},
};

use super::get::{HumanResponse, load};

/// Update Human Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateHumanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub home_uuid: Option<Uuid>,
}

impl UpdateHumanRequest {
    fn into_update(self, today: jiff::civil::Date) -> Result<HumanUpdate, FieldError> {
        if let Some(name) = &self.name {
            validation::required_text("name", name, validation::MAX_NAME_CHARS)?;
        }

        if let Some(description) = &self.description {
            validation::capped_text("description", description, validation::MAX_DESCRIPTION_CHARS)?;
        }

        let gender = self
            .gender
            .as_deref()
            .map(validation::parse_gender)
            .transpose()?;

        let date_of_birth = self
            .date_of_birth
            .as_deref()
            .map(|value| validation::parse_birth_date(value, today))
            .transpose()?;

        Ok(HumanUpdate {
            name: self.name,
            gender,
            date_of_birth,
            description: self.description,
            home_uuid: self.home_uuid.map(Into::into),
        })
    }
}

/// Update Human Handler
#[endpoint(
    tags("humans"),
    summary = "Update Human",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Human updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Human not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateHumanRequest>,
    depot: &mut Depot,
) -> Result<Json<HumanResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let update = json
        .into_inner()
        .into_update(jiff::Zoned::now().date())
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let human = state
        .humans
        .update_human(uuid.into_inner().into(), update)
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(load(state, human).await?))
}
