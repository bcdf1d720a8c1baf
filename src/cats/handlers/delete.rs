//! Delete Cat Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{cats::errors::into_status_error, extensions::*, state::State};

/// Delete Cat Handler
#[endpoint(
    tags("cats"),
    summary = "Delete Cat",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cat deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cat not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let rows_affected = state
        .cats
        .delete_cat(uuid.into_inner().into())
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
        cats::models::CatUuid, cats::repository::MockCatsRepository, test_helpers::cats_service,
    };

    use super::*;

    fn make_service(repo: MockCatsRepository) -> Service {
        cats_service(repo, Router::with_path("cats/{uuid}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_cat_success() -> TestResult {
        let uuid = CatUuid::new();

        let mut repo = MockCatsRepository::new();

        repo.expect_delete_cat()
            .once()
            .withf(move |c| *c == uuid)
            .return_once(|_| Ok(1));

        let res = TestClient::delete(format!("http://example.com/cats/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_cat_returns_404() -> TestResult {
        let uuid = CatUuid::new();

        let mut repo = MockCatsRepository::new();

        repo.expect_delete_cat().once().return_once(|_| Ok(0));

        let res = TestClient::delete(format!("http://example.com/cats/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
