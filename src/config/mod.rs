//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

/// Cattery JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "cattery", about = "Cattery JSON API Server", long_about = None)]
pub(crate) struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub(crate) server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub(crate) database: DatabaseConfig,

    /// Token authentication settings.
    #[command(flatten)]
    pub(crate) auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub(crate) fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
