//! Breed Errors

use salvo::http::StatusError;
use tracing::error;

use crate::breeds::repository::BreedsRepositoryError;

pub(crate) fn into_status_error(error: BreedsRepositoryError) -> StatusError {
    match error {
        BreedsRepositoryError::AlreadyExists => {
            StatusError::conflict().brief("Breed name already exists")
        }
        BreedsRepositoryError::InvalidReference
        | BreedsRepositoryError::MissingRequiredData
        | BreedsRepositoryError::InvalidData => {
            StatusError::bad_request().brief("Invalid breed payload")
        }
        BreedsRepositoryError::Sql(source) => {
            error!("breeds storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
