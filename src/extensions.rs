//! Handler plumbing shared across resource modules.
//!
//! Both helpers collapse failures that no client can cause into a logged
//! 500, keeping handler bodies focused on the request itself.

use std::{
    any::{Any, type_name},
    fmt::Display,
};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Fetch a value injected into the depot at router setup.
pub(crate) trait DepotExt {
    /// A missing injection is a wiring bug, not a request problem.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_absent| {
            error!("depot has no {}", type_name::<T>());

            StatusError::internal_server_error()
        })
    }
}

/// Turn any displayable error into a logged 500.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}
