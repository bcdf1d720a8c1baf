//! Delete Human Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, humans::errors::into_status_error, state::State};

/// Delete Human Handler
///
/// The human's cats are removed with them.
#[endpoint(
    tags("humans"),
    summary = "Delete Human",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Human deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Human not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let rows_affected = state
        .humans
        .delete_human(uuid.into_inner().into())
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
        humans::models::HumanUuid, humans::repository::MockHumansRepository,
        test_helpers::humans_service,
    };

    use super::*;

    fn make_service(repo: MockHumansRepository) -> Service {
        humans_service(repo, Router::with_path("humans/{uuid}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_human_success() -> TestResult {
        let uuid = HumanUuid::new();

        let mut repo = MockHumansRepository::new();

        repo.expect_delete_human()
            .once()
            .withf(move |h| *h == uuid)
            .return_once(|_| Ok(1));

        let res = TestClient::delete(format!("http://example.com/humans/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_human_returns_404() -> TestResult {
        let uuid = HumanUuid::new();

        let mut repo = MockHumansRepository::new();

        repo.expect_delete_human().once().return_once(|_| Ok(0));

        let res = TestClient::delete(format!("http://example.com/humans/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
