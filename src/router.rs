//! App Router
//!
//! Token issuance and the healthcheck stay outside the auth hoop; every
//! resource route sits behind it, and the hoop itself lets reads through.

use salvo::Router;

use crate::{auth, breeds, cats, healthcheck, homes, humans};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("auth/token").post(auth::handlers::obtain::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(breeds_router())
                .push(cats_router())
                .push(homes_router())
                .push(humans_router()),
        )
}

fn breeds_router() -> Router {
    Router::with_path("breeds")
        .get(breeds::handlers::index::handler)
        .post(breeds::handlers::create::handler)
        .push(
            Router::with_path("{uuid}")
                .get(breeds::handlers::get::handler)
                .put(breeds::handlers::update::handler)
                .patch(breeds::handlers::update::handler)
                .delete(breeds::handlers::delete::handler),
        )
}

fn cats_router() -> Router {
    Router::with_path("cats")
        .get(cats::handlers::index::handler)
        .post(cats::handlers::create::handler)
        .push(
            Router::with_path("{uuid}")
                .get(cats::handlers::get::handler)
                .put(cats::handlers::update::handler)
                .patch(cats::handlers::update::handler)
                .delete(cats::handlers::delete::handler),
        )
}

fn homes_router() -> Router {
    Router::with_path("homes")
        .get(homes::handlers::index::handler)
        .post(homes::handlers::create::handler)
        .push(
            Router::with_path("{uuid}")
                .get(homes::handlers::get::handler)
                .put(homes::handlers::update::handler)
                .patch(homes::handlers::update::handler)
                .delete(homes::handlers::delete::handler),
        )
}

fn humans_router() -> Router {
    Router::with_path("humans")
        .get(humans::handlers::index::handler)
        .post(humans::handlers::create::handler)
        .push(
            Router::with_path("{uuid}")
                .get(humans::handlers::get::handler)
                .put(humans::handlers::update::handler)
                .patch(humans::handlers::update::handler)
                .delete(humans::handlers::delete::handler),
        )
}
