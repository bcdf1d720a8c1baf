//! Create Home Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    homes::errors::into_status_error,
    homes::models::{HomeType, HomeUuid, NewHome},
    state::State,
    validation::{self, FieldError},
};

/// Create Home Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateHomeRequest {
    pub name: String,
    pub address: String,
    /// One of `landed` or `condominium`
    pub hometype: String,
}

impl CreateHomeRequest {
    fn into_new_home(self) -> Result<NewHome, FieldError> {
        validation::required_text("name", &self.name, validation::MAX_NAME_CHARS)?;
        validation::required_text("address", &self.address, validation::MAX_ADDRESS_CHARS)?;

        let hometype: HomeType = self.hometype.parse().map_err(|error| FieldError {
            field: "hometype",
            message: format!("{error}"),
        })?;

        Ok(NewHome {
            uuid: HomeUuid::new(),
            name: self.name,
            address: self.address,
            hometype,
        })
    }
}

/// Home Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HomeCreatedResponse {
    /// Created home UUID
    pub uuid: Uuid,
}

/// Create Home Handler
#[endpoint(
    tags("homes"),
    summary = "Create Home",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Home created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateHomeRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HomeCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let new_home = json
        .into_inner()
        .into_new_home()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let uuid = state
        .homes
        .create_home(new_home)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/homes/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(HomeCreatedResponse {
        uuid: uuid.into_uuid(),
    }))
}
