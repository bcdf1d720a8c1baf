//! Delete Home Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, homes::errors::into_status_error, state::State};

/// Delete Home Handler
///
/// Humans living in the home and their cats are removed with it.
#[endpoint(
    tags("homes"),
    summary = "Delete Home",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Home deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Home not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let rows_affected = state
        .homes
        .delete_home(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?;

    if rows_affected == 0 {
        return Err(StatusError::not_found());
    }

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::{
        homes::models::HomeUuid, homes::repository::MockHomesRepository,
        test_helpers::homes_service,
    };

    use super::*;

    fn make_service(repo: MockHomesRepository) -> Service {
        homes_service(repo, Router::with_path("homes/{uuid}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_home_success() -> TestResult {
        let uuid = HomeUuid::new();

        let mut repo = MockHomesRepository::new();

        repo.expect_delete_home()
            .once()
            .withf(move |h| *h == uuid)
            .return_once(|_| Ok(1));

        let res = TestClient::delete(format!("http://example.com/homes/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_home_returns_404() -> TestResult {
        let uuid = HomeUuid::new();

        let mut repo = MockHomesRepository::new();

        repo.expect_delete_home().once().return_once(|_| Ok(0));

        let res = TestClient::delete(format!("http://example.com/homes/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
