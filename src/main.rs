//! Cattery JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    auth::{PgAuthRepository, TokenPolicy},
    breeds::PgBreedsRepository,
    cats::PgCatsRepository,
    config::ServerConfig,
    homes::PgHomesRepository,
    humans::PgHumansRepository,
    state::State,
};

mod auth;
mod breeds;
mod cats;
mod config;
mod database;
mod extensions;
mod gender;
mod healthcheck;
mod homes;
mod humans;
mod projection;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod uuids;
mod validation;

/// Cattery JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let pool = match database::connect(&config.database.database_url).await {
        Ok(pool) => pool,
        Err(connect_error) => {
            error!("failed to connect to database: {connect_error}");

            process::exit(1);
        }
    };

    let state = Arc::new(State::new(
        TokenPolicy::new(config.auth.expiry_window()),
        Arc::new(PgAuthRepository::new(pool.clone())),
        Arc::new(PgBreedsRepository::new(pool.clone())),
        Arc::new(PgHomesRepository::new(pool.clone())),
        Arc::new(PgHumansRepository::new(pool.clone())),
        Arc::new(PgCatsRepository::new(pool)),
    ));

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(router::app_router());

    let doc = OpenApi::new("Cattery API", "0.1.0")
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router.push(doc.into_router("/api-doc/openapi.json"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
