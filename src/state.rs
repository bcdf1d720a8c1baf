//! State

use std::{fmt, sync::Arc};

use crate::{
    auth::{AuthRepository, TokenPolicy},
    breeds::BreedsRepository,
    cats::CatsRepository,
    homes::HomesRepository,
    humans::HumansRepository,
};

/// Shared application state injected into the request depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) tokens: TokenPolicy,
    pub(crate) auth: Arc<dyn AuthRepository>,
    pub(crate) breeds: Arc<dyn BreedsRepository>,
    pub(crate) homes: Arc<dyn HomesRepository>,
    pub(crate) humans: Arc<dyn HumansRepository>,
    pub(crate) cats: Arc<dyn CatsRepository>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        tokens: TokenPolicy,
        auth: Arc<dyn AuthRepository>,
        breeds: Arc<dyn BreedsRepository>,
        homes: Arc<dyn HomesRepository>,
        humans: Arc<dyn HumansRepository>,
        cats: Arc<dyn CatsRepository>,
    ) -> Self {
        Self {
            tokens,
            auth,
            breeds,
            homes,
            humans,
            cats,
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
