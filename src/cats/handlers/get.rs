//! Get Cat Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::{cats::errors::into_status_error, cats::models::Cat, extensions::*, state::State};

/// A cat carries its direct fields, links to its breed and owner, and a
/// derived link to the home it lives in through the owner.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CatResponse {
    pub uuid: Uuid,

    /// Link to this cat
    pub url: String,

    pub name: String,

    /// One of `M`, `F` or `O`
    pub gender: String,

    /// ISO date (YYYY-MM-DD)
    pub date_of_birth: String,

    pub description: String,

    /// Link to this cat's breed
    pub breed: String,

    /// Link to this cat's owner
    pub owner: String,

    /// Link to the home this cat lives in, through its owner
    pub home: String,
}

/// Resolve the derived home link for one cat.
///
/// A cat without a resolvable owner is a referential integrity failure,
/// not a client error.
pub(crate) async fn load(state: &State, cat: Cat) -> Result<CatResponse, StatusError> {
    let owner = state
        .humans
        .get_human(cat.owner_uuid)
        .await
        .or_500("failed to resolve cat owner")?
        .ok_or_else(|| {
            error!("cat {} references missing owner {}", cat.uuid, cat.owner_uuid);

            StatusError::internal_server_error()
        })?;

    Ok(CatResponse {
        uuid: cat.uuid.into_uuid(),
        url: format!("/cats/{}", cat.uuid),
        name: cat.name,
        gender: cat.gender.to_string(),
        date_of_birth: cat.date_of_birth.to_string(),
        description: cat.description,
        breed: format!("/breeds/{}", cat.breed_uuid),
        owner: format!("/humans/{}", cat.owner_uuid),
        home: format!("/homes/{}", owner.home_uuid),
    })
}

/// Get Cat Handler
#[endpoint(
    tags("cats"),
    summary = "Get Cat",
    responses(
        (status_code = StatusCode::OK, description = "The cat"),
        (status_code = StatusCode::NOT_FOUND, description = "Cat not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CatResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cat = state
        .cats
        .get_cat(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(load(state, cat).await?))
}
