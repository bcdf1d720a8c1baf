//! Update Home Handler
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
    homes::errors::into_status_error,
    homes::models::{HomeType, HomeUpdate},
    state::State,
    validation::{self, FieldError},
};

use super::get::HomeResponse;

/// Update Home Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateHomeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hometype: Option<String>,
}

impl UpdateHomeRequest {
    fn into_update(self) -> Result<HomeUpdate, FieldError> {
        if let Some(name) = &self.name {
            validation::required_text("name", name, validation::MAX_NAME_CHARS)?;
        }

        if let Some(address) = &self.address {
            validation::required_text("address", address, validation::MAX_ADDRESS_CHARS)?;
        }

        let hometype = self
            .hometype
            .as_deref()
            .map(|value| {
                value.parse::<HomeType>().map_err(|error| FieldError {
                    field: "hometype",
                    message: format!("{error}"),
                })
            })
            .transpose()?;

        Ok(HomeUpdate {
            name: self.name,
            address: self.address,
            hometype,
        })
    }
}

/// Update Home Handler
#[endpoint(
    tags("homes"),
    summary = "Update Home",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Home updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Home not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    json: JsonBody<UpdateHomeRequest>,
    depot: &mut Depot,
) -> Result<Json<HomeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let update = json
        .into_inner()
        .into_update()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let home = state
        .homes
        .update_home(uuid.into_inner().into(), update)
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(home.into()))
}
