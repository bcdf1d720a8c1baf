//! Human Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, humans::errors::into_status_error, state::State, validation};

use super::get::{HumanResponse, load};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HumansResponse {
    /// The list of humans
    pub humans: Vec<HumanResponse>,
}

/// Human Index Handler
///
/// Returns a list of humans with their home and owned-cat links,
/// optionally narrowed by exact `name` or `gender` match.
#[endpoint(tags("humans"), summary = "List Humans")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    gender: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<HumansResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name = name.into_inner();
    let gender = gender
        .into_inner()
        .as_deref()
        .map(validation::parse_gender)
        .transpose()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let mut humans = Vec::new();

    for human in state
        .humans
        .list_humans()
        .await
        .map_err(into_status_error)?
    {
        if name.as_deref().is_some_and(|value| human.name != value) {
            continue;
        }

        if gender.is_some_and(|value| human.gender != value) {
            continue;
        }

        humans.push(load(state, human).await?);
    }

    Ok(Json(HumansResponse { humans }))
}
