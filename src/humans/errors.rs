//! Human Errors

use salvo::http::StatusError;
use tracing::error;

use crate::humans::repository::HumansRepositoryError;

pub(crate) fn into_status_error(error: HumansRepositoryError) -> StatusError {
    match error {
        HumansRepositoryError::AlreadyExists => {
            StatusError::conflict().brief("Human already exists")
        }
        HumansRepositoryError::InvalidReference => {
            StatusError::bad_request().brief("home_uuid: no such home")
        }
        HumansRepositoryError::MissingRequiredData | HumansRepositoryError::InvalidData => {
            StatusError::bad_request().brief("Invalid human payload")
        }
        HumansRepositoryError::Sql(source) => {
            error!("humans storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
