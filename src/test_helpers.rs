//! Shared test scaffolding.
//!
//! Handlers only reach their repositories through [`State`], so tests build
//! one from mock repositories. Expectations that are never set will panic on
//! use, which keeps each test honest about what it touches.

use std::sync::Arc;

use jiff::{SignedDuration, civil::date};
use salvo::{affix_state::inject, prelude::*};

use crate::{
    auth::{MockAuthRepository, TokenPolicy},
    breeds::MockBreedsRepository,
    breeds::models::BreedUuid,
    cats::MockCatsRepository,
    cats::models::{Cat, CatUuid},
    gender::Gender,
    homes::MockHomesRepository,
    homes::models::HomeUuid,
    humans::MockHumansRepository,
    humans::models::{Human, HumanUuid},
    state::State,
};

/// All five repositories mocked, ready for expectations.
pub(crate) struct TestState {
    pub auth: MockAuthRepository,
    pub breeds: MockBreedsRepository,
    pub homes: MockHomesRepository,
    pub humans: MockHumansRepository,
    pub cats: MockCatsRepository,
}

impl TestState {
    pub(crate) fn new() -> Self {
        Self {
            auth: MockAuthRepository::new(),
            breeds: MockBreedsRepository::new(),
            homes: MockHomesRepository::new(),
            humans: MockHumansRepository::new(),
            cats: MockCatsRepository::new(),
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        Arc::new(State::new(
            TokenPolicy::new(SignedDuration::from_hours(24)),
            Arc::new(self.auth),
            Arc::new(self.breeds),
            Arc::new(self.homes),
            Arc::new(self.humans),
            Arc::new(self.cats),
        ))
    }

    /// Build a service routing `route` with this state injected.
    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

pub(crate) fn state_with_auth(auth: MockAuthRepository) -> Arc<State> {
    let mut state = TestState::new();
    state.auth = auth;

    state.into_state()
}

pub(crate) fn auth_service(auth: MockAuthRepository, route: Router) -> Service {
    let mut state = TestState::new();
    state.auth = auth;

    state.into_service(route)
}

pub(crate) fn breeds_service(breeds: MockBreedsRepository, route: Router) -> Service {
    let mut state = TestState::new();
    state.breeds = breeds;

    state.into_service(route)
}

pub(crate) fn homes_service(homes: MockHomesRepository, route: Router) -> Service {
    let mut state = TestState::new();
    state.homes = homes;

    state.into_service(route)
}

pub(crate) fn humans_service(humans: MockHumansRepository, route: Router) -> Service {
    let mut state = TestState::new();
    state.humans = humans;

    state.into_service(route)
}

pub(crate) fn cats_service(cats: MockCatsRepository, route: Router) -> Service {
    let mut state = TestState::new();
    state.cats = cats;

    state.into_service(route)
}

pub(crate) fn make_human(uuid: HumanUuid, home: HomeUuid) -> Human {
    Human {
        uuid,
        name: "Mary".to_string(),
        gender: Gender::Female,
        date_of_birth: date(1990, 2, 1),
        description: String::new(),
        home_uuid: home,
    }
}

pub(crate) fn make_cat(uuid: CatUuid, breed: BreedUuid, owner: HumanUuid) -> Cat {
    Cat {
        uuid,
        name: "Whiskers".to_string(),
        gender: Gender::Male,
        date_of_birth: date(2021, 5, 20),
        description: String::new(),
        breed_uuid: breed,
        owner_uuid: owner,
    }
}
