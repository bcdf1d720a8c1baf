//! Breed Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{breeds::errors::into_status_error, extensions::*, state::State};

use super::get::{BreedResponse, load};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BreedsResponse {
    /// The list of breeds
    pub breeds: Vec<BreedResponse>,
}

/// Breed Index Handler
///
/// Returns a list of breeds with their derived cat and home links,
/// optionally narrowed by exact `name` or `origin` match.
#[endpoint(tags("breeds"), summary = "List Breeds")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    origin: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<BreedsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name = name.into_inner();
    let origin = origin.into_inner();

    let mut breeds = Vec::new();

    for breed in state
        .breeds
        .list_breeds()
        .await
        .map_err(into_status_error)?
    {
        if name.as_deref().is_some_and(|value| breed.name != value) {
            continue;
        }

        if origin.as_deref().is_some_and(|value| breed.origin != value) {
            continue;
        }

        breeds.push(load(state, breed).await?);
    }

    Ok(Json(BreedsResponse { breeds }))
}
