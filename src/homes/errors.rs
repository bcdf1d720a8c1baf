//! Home Errors

use salvo::http::StatusError;
use tracing::error;

use crate::homes::repository::HomesRepositoryError;

pub(crate) fn into_status_error(error: HomesRepositoryError) -> StatusError {
    match error {
        HomesRepositoryError::AlreadyExists => StatusError::conflict().brief("Home already exists"),
        HomesRepositoryError::InvalidReference
        | HomesRepositoryError::MissingRequiredData
        | HomesRepositoryError::InvalidData => {
            StatusError::bad_request().brief("Invalid home payload")
        }
        HomesRepositoryError::Sql(source) => {
            error!("homes storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
