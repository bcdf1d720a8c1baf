//! Get Home Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, homes::errors::into_status_error, homes::models::Home, state::State};

/// A home has direct fields only; nothing is derived.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HomeResponse {
    pub uuid: Uuid,

    /// Link to this home
    pub url: String,

    pub name: String,
    pub address: String,

    /// One of `landed` or `condominium`
    pub hometype: String,
}

impl From<Home> for HomeResponse {
    fn from(home: Home) -> Self {
        Self {
            uuid: home.uuid.into_uuid(),
            url: format!("/homes/{}", home.uuid),
            name: home.name,
            address: home.address,
            hometype: home.hometype.to_string(),
        }
    }
}

/// Get Home Handler
#[endpoint(
    tags("homes"),
    summary = "Get Home",
    responses(
        (status_code = StatusCode::OK, description = "The home"),
        (status_code = StatusCode::NOT_FOUND, description = "Home not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<HomeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let home = state
        .homes
        .get_home(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(home.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        homes::models::HomeUuid, homes::repository::MockHomesRepository,
        test_helpers::homes_service,
    };

    use super::{super::tests::make_home, *};

    fn make_service(repo: MockHomesRepository) -> Service {
        homes_service(repo, Router::with_path("homes/{uuid}").get(handler))
    }

    #[tokio::test]
    async fn test_get_home_returns_200() -> TestResult {
        let uuid = HomeUuid::new();
        let home = make_home(uuid);

        let mut repo = MockHomesRepository::new();

        repo.expect_get_home()
            .once()
            .withf(move |h| *h == uuid)
            .return_once(move |_| Ok(Some(home)));

        let mut res = TestClient::get(format!("http://example.com/homes/{uuid}"))
            .send(&make_service(repo))
            .await;

        let body: HomeResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.url, format!("/homes/{uuid}"));
        assert_eq!(body.hometype, "landed");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_home_returns_404() -> TestResult {
        let uuid = HomeUuid::new();

        let mut repo = MockHomesRepository::new();

        repo.expect_get_home().once().return_once(|_| Ok(None));

        let res = TestClient::get(format!("http://example.com/homes/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/homes/123")
            .send(&make_service(MockHomesRepository::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
