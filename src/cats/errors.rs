//! Cat Errors

use salvo::http::StatusError;
use tracing::error;

use crate::cats::repository::CatsRepositoryError;

pub(crate) fn into_status_error(error: CatsRepositoryError) -> StatusError {
    match error {
        CatsRepositoryError::AlreadyExists => StatusError::conflict().brief("Cat already exists"),
        CatsRepositoryError::InvalidReference => {
            StatusError::bad_request().brief("breed_uuid or owner_uuid: no such resource")
        }
        CatsRepositoryError::MissingRequiredData | CatsRepositoryError::InvalidData => {
            StatusError::bad_request().brief("Invalid cat payload")
        }
        CatsRepositoryError::Sql(source) => {
            error!("cats storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
