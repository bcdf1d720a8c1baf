//! Delete Breed Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{breeds::errors::into_status_error, extensions::*, state::State};

/// Delete Breed Handler
///
/// Cats of the breed are removed with it.
#[endpoint(
    tags("breeds"),
    summary = "Delete Breed",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Breed deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Breed not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let rows_affected = state
        .breeds
        .delete_breed(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    if rows_affected == 0 {
        return Err(StatusError::not_found());
    }

    Ok(StatusCode::OK)
}
