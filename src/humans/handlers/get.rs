//! Get Human Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*, humans::errors::into_status_error, humans::models::Human, state::State,
};

/// A human carries its direct fields, a link to the home they live in,
/// and derived links to the cats they own.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HumanResponse {
    pub uuid: Uuid,

    /// Link to this human
    pub url: String,

    pub name: String,

    /// One of `M`, `F` or `O`
    pub gender: String,

    /// ISO date (YYYY-MM-DD)
    pub date_of_birth: String,

    pub description: String,

    /// Link to the home this human lives in
    pub home: String,

    /// Links to the cats owned by this human
    pub cats: Vec<String>,
}

/// Resolve the owned-cat links for one human.
pub(crate) async fn load(state: &State, human: Human) -> Result<HumanResponse, StatusError> {
    let cats = state
        .cats
        .list_cats_by_owner(human.uuid)
        .await
        .or_500("failed to list cats for human")?;

    Ok(HumanResponse {
        uuid: human.uuid.into_uuid(),
        url: format!("/humans/{}", human.uuid),
        name: human.name,
        gender: human.gender.to_string(),
        date_of_birth: human.date_of_birth.to_string(),
        description: human.description,
        home: format!("/homes/{}", human.home_uuid),
        cats: cats.iter().map(|cat| format!("/cats/{}", cat.uuid)).collect(),
    })
}

/// Get Human Handler
#[endpoint(
    tags("humans"),
    summary = "Get Human",
    responses(
        (status_code = StatusCode::OK, description = "The human"),
        (status_code = StatusCode::NOT_FOUND, description = "Human not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<HumanResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let human = state
        .humans
        .get_human(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(load(state, human).await?))
}
