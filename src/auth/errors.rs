//! Auth errors.

use thiserror::Error;

use crate::auth::repository::AuthRepositoryError;

/// Rejections from the token policy.
///
/// The first three are deliberately indistinguishable to HTTP clients: all
/// surface as a uniform 401 so callers cannot probe whether a key exists, has
/// expired, or belongs to a disabled account. The variants exist for logging.
#[derive(Debug, Error)]
pub(crate) enum AuthError {
    /// No token matches the presented key.
    #[error("invalid token")]
    InvalidCredential,

    /// The owning principal is missing or disabled.
    #[error("user is inactive")]
    InactiveAccount,

    /// The token is older than the expiry window.
    #[error("token has expired")]
    ExpiredCredential,

    /// Username/password verification failed at issuance time.
    #[error("unable to log in with provided credentials")]
    InvalidCredentials,

    #[error("password verification error")]
    Password(#[source] bcrypt::BcryptError),

    #[error("storage error")]
    Repository(#[from] AuthRepositoryError),
}
