//! Auth Config

use clap::Args;
use jiff::SignedDuration;

/// Token authentication settings.
///
/// The expiry window is deliberately configuration, not a module constant, so
/// deployments (and tests) can pick their own window.
#[derive(Debug, Args)]
pub(crate) struct AuthConfig {
    /// Hours an issued token stays valid
    #[arg(long, env = "AUTH_TOKEN_EXPIRY_HOURS", default_value = "24")]
    pub(crate) token_expiry_hours: u32,
}

impl AuthConfig {
    /// The expiry window as a duration.
    #[must_use]
    pub(crate) fn expiry_window(&self) -> SignedDuration {
        SignedDuration::from_hours(i64::from(self.token_expiry_hours))
    }
}
