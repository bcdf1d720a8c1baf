//! Home Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, homes::errors::into_status_error, state::State};

use super::get::HomeResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HomesResponse {
    /// The list of homes
    pub homes: Vec<HomeResponse>,
}

/// Home Index Handler
///
/// Returns a list of homes, optionally narrowed by exact `name` or
/// `address` match.
#[endpoint(tags("homes"), summary = "List Homes")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    address: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<HomesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name = name.into_inner();
    let address = address.into_inner();

    let homes = state
        .homes
        .list_homes()
        .await
        .map_err(into_status_error)?
        .into_iter()
        .filter(|home| name.as_deref().is_none_or(|value| home.name == value))
        .filter(|home| address.as_deref().is_none_or(|value| home.address == value))
        .map(Into::into)
        .collect();

    Ok(Json(HomesResponse { homes }))
}
