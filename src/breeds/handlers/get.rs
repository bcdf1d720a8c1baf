//! Get Breed Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    breeds::errors::into_status_error, breeds::models::Breed, extensions::*, projection,
    state::State,
};

/// A breed carries its direct fields plus two derived link lists: the
/// cats of the breed, and the homes those cats live in through their
/// owners. Homes are deduplicated, first seen first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BreedResponse {
    pub uuid: Uuid,

    /// Link to this breed
    pub url: String,

    pub name: String,
    pub origin: String,
    pub description: String,

    /// Links to the cats of this breed
    pub cats: Vec<String>,

    /// Links to the homes housing this breed, without duplicates
    pub homes: Vec<String>,
}

/// Resolve the derived link lists for one breed.
pub(crate) async fn load(state: &State, breed: Breed) -> Result<BreedResponse, StatusError> {
    let cats = state
        .cats
        .list_cats_by_breed(breed.uuid)
        .await
        .or_500("failed to list cats for breed")?;

    let homes = if cats.is_empty() {
        Vec::new()
    } else {
        let owners = state
            .humans
            .list_humans_by_uuids(projection::distinct_owners(&cats))
            .await
            .or_500("failed to resolve owners for breed")?;

        projection::distinct_homes(&owners)
    };

    Ok(BreedResponse {
        uuid: breed.uuid.into_uuid(),
        url: format!("/breeds/{}", breed.uuid),
        name: breed.name,
        origin: breed.origin,
        description: breed.description,
        cats: cats.iter().map(|cat| format!("/cats/{}", cat.uuid)).collect(),
        homes: homes.iter().map(|home| format!("/homes/{home}")).collect(),
    })
}

/// Get Breed Handler
#[endpoint(
    tags("breeds"),
    summary = "Get Breed",
    responses(
        (status_code = StatusCode::OK, description = "The breed"),
        (status_code = StatusCode::NOT_FOUND, description = "Breed not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    uuid: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BreedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let breed = state
        .breeds
        .get_breed(uuid.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(StatusError::not_found)?;

    Ok(Json(load(state, breed).await?))
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

    use super::{super::tests::make_breed, *};

    fn route() -> Router {
        Router::with_path("breeds/{uuid}").get(handler)
    }

    #[tokio::test]
    async fn test_get_breed_without_cats_has_empty_links() -> TestResult {
        let uuid = BreedUuid::new();
        let breed = make_breed(uuid);

        let mut state = TestState::new();

        state
            .breeds
            .expect_get_breed()
            .once()
            .withf(move |b| *b == uuid)
            .return_once(move |_| Ok(Some(breed)));

        state
            .cats
            .expect_list_cats_by_breed()
            .once()
            .return_once(|_| Ok(vec![]));

        state.humans.expect_list_humans_by_uuids().never();

        let mut res = TestClient::get(format!("http://example.com/breeds/{uuid}"))
            .send(&state.into_service(route()))
            .await;

        let body: BreedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.name, "Siberian");
        assert!(body.cats.is_empty());
        assert!(body.homes.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_breed_deduplicates_homes() -> TestResult {
        let uuid = BreedUuid::new();
        let breed = make_breed(uuid);

        let owner_a = HumanUuid::new();
        let owner_b = HumanUuid::new();
        let home_a = HomeUuid::new();
        let home_b = HomeUuid::new();

        // Three cats, two owners, and the owners live in two homes.
        let cats = vec![
            make_cat(CatUuid::new(), uuid, owner_a),
            make_cat(CatUuid::new(), uuid, owner_a),
            make_cat(CatUuid::new(), uuid, owner_b),
        ];
        let cat_links: Vec<String> = cats.iter().map(|c| format!("/cats/{}", c.uuid)).collect();

        let mut state = TestState::new();

        state
            .breeds
            .expect_get_breed()
            .once()
            .return_once(move |_| Ok(Some(breed)));

        state
            .cats
            .expect_list_cats_by_breed()
            .once()
            .withf(move |b| *b == uuid)
            .return_once(move |_| Ok(cats));

        state
            .humans
            .expect_list_humans_by_uuids()
            .once()
            .withf(move |owners| *owners == vec![owner_a, owner_b])
            .return_once(move |_| {
                Ok(vec![make_human(owner_a, home_a), make_human(owner_b, home_b)])
            });

        let mut res = TestClient::get(format!("http://example.com/breeds/{uuid}"))
            .send(&state.into_service(route()))
            .await;

        let body: BreedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cats, cat_links);
        assert_eq!(
            body.homes,
            vec![format!("/homes/{home_a}"), format!("/homes/{home_b}")]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_breed_shared_home_appears_once() -> TestResult {
        let uuid = BreedUuid::new();
        let breed = make_breed(uuid);

        let owner_a = HumanUuid::new();
        let owner_b = HumanUuid::new();
        let home = HomeUuid::new();

        let cats = vec![
            make_cat(CatUuid::new(), uuid, owner_a),
            make_cat(CatUuid::new(), uuid, owner_b),
        ];

        let mut state = TestState::new();

        state
            .breeds
            .expect_get_breed()
            .once()
            .return_once(move |_| Ok(Some(breed)));

        state
            .cats
            .expect_list_cats_by_breed()
            .once()
            .return_once(move |_| Ok(cats));

        state
            .humans
            .expect_list_humans_by_uuids()
            .once()
            .return_once(move |_| Ok(vec![make_human(owner_a, home), make_human(owner_b, home)]));

        let mut res = TestClient::get(format!("http://example.com/breeds/{uuid}"))
            .send(&state.into_service(route()))
            .await;

        let body: BreedResponse = res.take_json().await?;

        assert_eq!(body.homes, vec![format!("/homes/{home}")]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_breed_returns_404() -> TestResult {
        let uuid = BreedUuid::new();

        let mut state = TestState::new();

        state.breeds.expect_get_breed().once().return_once(|_| Ok(None));
        state.cats.expect_list_cats_by_breed().never();

        let res = TestClient::get(format!("http://example.com/breeds/{uuid}"))
            .send(&state.into_service(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
