//! Cat Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{cats::errors::into_status_error, extensions::*, state::State, validation};

use super::get::{CatResponse, load};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CatsResponse {
    /// The list of cats
    pub cats: Vec<CatResponse>,
}

/// Cat Index Handler
///
/// Returns a list of cats with their breed, owner and derived home links,
/// optionally narrowed by exact `name` or `gender` match.
#[endpoint(tags("cats"), summary = "List Cats")]
pub(crate) async fn handler(
    name: QueryParam<String, false>,
    gender: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CatsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let name = name.into_inner();
    let gender = gender
        .into_inner()
        .as_deref()
        .map(validation::parse_gender)
        .transpose()
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let mut cats = Vec::new();

    for cat in state.cats.list_cats().await.map_err(into_status_error)? {
        if name.as_deref().is_some_and(|value| cat.name != value) {
            continue;
        }

        if gender.is_some_and(|value| cat.gender != value) {
            continue;
        }

        cats.push(load(state, cat).await?);
    }

    Ok(Json(CatsResponse { cats }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        breeds::models::BreedUuid,
        cats::models::CatUuid,
        homes::models::HomeUuid,
        humans::models::HumanUuid,
        test_helpers::{TestState, make_cat, make_human},
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("cats").get(handler)
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut state = TestState::new();

        state.cats.expect_list_cats().once().return_once(|| Ok(vec![]));

        let response: CatsResponse = TestClient::get("http://example.com/cats")
            .send(&state.into_service(route()))
            .await
            .take_json()
            .await?;

        assert!(response.cats.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_cats() -> TestResult {
        let breed = BreedUuid::new();
        let owner = HumanUuid::new();
        let home = HomeUuid::new();

        let uuid_a = CatUuid::new();
        let uuid_b = CatUuid::new();

        let mut state = TestState::new();

        state.cats.expect_list_cats().once().return_once(move || {
            Ok(vec![make_cat(uuid_a, breed, owner), make_cat(uuid_b, breed, owner)])
        });

        state
            .humans
            .expect_get_human()
            .times(2)
            .returning(move |_| Ok(Some(make_human(owner, home))));

        let response: CatsResponse = TestClient::get("http://example.com/cats")
            .send(&state.into_service(route()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.cats.len(), 2, "expected two cats");
        assert_eq!(response.cats[0].uuid, uuid_a.into_uuid());
        assert_eq!(response.cats[1].uuid, uuid_b.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_name() -> TestResult {
        let breed = BreedUuid::new();
        let owner = HumanUuid::new();
        let home = HomeUuid::new();

        let uuid_a = CatUuid::new();
        let uuid_b = CatUuid::new();

        let mut state = TestState::new();

        state.cats.expect_list_cats().once().return_once(move || {
            let mut other = make_cat(uuid_b, breed, owner);
            other.name = "Mittens".to_string();

            Ok(vec![make_cat(uuid_a, breed, owner), other])
        });

        state
            .humans
            .expect_get_human()
            .once()
            .return_once(move |_| Ok(Some(make_human(owner, home))));

        let response: CatsResponse = TestClient::get("http://example.com/cats?name=Mittens")
            .send(&state.into_service(route()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.cats.len(), 1, "expected one matching cat");
        assert_eq!(response.cats[0].uuid, uuid_b.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_gender_returns_400() -> TestResult {
        let mut state = TestState::new();

        state.cats.expect_list_cats().never();

        let res = TestClient::get("http://example.com/cats?gender=X")
            .send(&state.into_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
