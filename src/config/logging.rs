//! Logging Config

use clap::Args;

/// Logging output settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Default log level when `RUST_LOG` is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub(crate) log_level: String,
}
