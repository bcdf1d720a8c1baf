//! Update Breed Handler
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
    breeds::errors::into_status_error,
    breeds::models::BreedUpdate,
    extensions::*,
    state::State,
    validation::{self, FieldError},
};

use super::get::{BreedResponse, load};

/// Update Breed Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBreedRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateBreedRequest {
    fn into_update(self) -> Result<BreedUpdate, FieldError> {
        if let Some(name) = &self.name {
            validation::required_text("name", name, validation::MAX_NAME_CHARS)?;
        }

        if let Some(origin) = &self.origin {
            validation::required_text("origin", origin, validation::MAX_ORIGIN_CHARS)?;
        }

        if let Some(description) = &self.description {
            validation::capped_text("description", description, validation::MAX_DESCRIPTION_CHARS)?;
        }

        Ok(BreedUpdate {
            name: self.name,
            origin: self.origin,
            description: self.description,
        })
    }
}

/// Update Breed Handler
#[endpoint(
    tags("breeds"),
    summary = "Update Breed",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Breed updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Breed not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Breed name already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateBreedRequest>,
    depot: &mut Depot,
) -> Result<Json<BreedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let update = json
        .into_inner()
        .into_update()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let breed = state
        .breeds
        .update_breed(uuid.into_inner().into(), update)
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(load(state, breed).await?))
}
