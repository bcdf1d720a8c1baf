//! Token authentication policy.
//!
//! Two operations: [`TokenPolicy::authenticate`] decides whether a presented
//! key authorises a write, and [`TokenPolicy::issue_or_renew`] is the only
//! path that mutates token freshness. Authentication itself is read-only:
//! expiry is detected, never recorded.

use jiff::{SignedDuration, Timestamp};
use tracing::debug;

use crate::auth::{
    errors::AuthError,
    key::generate_token_key,
    models::{AuthToken, NewAuthToken, User},
    repository::{AuthRepository, AuthRepositoryError},
};

/// The expiry window is injected at construction (see `AuthConfig`), so tests
/// can pick arbitrary windows.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenPolicy {
    expiry_window: SignedDuration,
}

impl TokenPolicy {
    #[must_use]
    pub(crate) fn new(expiry_window: SignedDuration) -> Self {
        Self { expiry_window }
    }

    fn is_expired(&self, token: &AuthToken, now: Timestamp) -> bool {
        now.duration_since(token.created_at) > self.expiry_window
    }

    /// Validate a presented bearer key.
    ///
    /// # Errors
    ///
    /// `InvalidCredential` for an unknown key, `InactiveAccount` for a
    /// missing or disabled principal, `ExpiredCredential` past the window.
    pub(crate) async fn authenticate(
        &self,
        repo: &dyn AuthRepository,
        key: &str,
        now: Timestamp,
    ) -> Result<(User, AuthToken), AuthError> {
        let token = repo
            .find_token_by_key(key)
            .await?
            .ok_or(AuthError::InvalidCredential)?;

        let user = repo
            .find_user(token.user_uuid)
            .await?
            .ok_or(AuthError::InactiveAccount)?;

        if !user.is_active {
            return Err(AuthError::InactiveAccount);
        }

        if self.is_expired(&token, now) {
            return Err(AuthError::ExpiredCredential);
        }

        Ok((user, token))
    }

    /// Verify primary credentials and return the principal's token, issuing a
    /// fresh one if none exists or the existing one has expired.
    ///
    /// Issuance within the window is idempotent: the existing key comes back
    /// unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for an unknown username, a disabled account or a
    /// password mismatch.
    pub(crate) async fn issue_or_renew(
        &self,
        repo: &dyn AuthRepository,
        username: &str,
        password: &str,
        now: Timestamp,
    ) -> Result<AuthToken, AuthError> {
        let user = repo
            .find_user_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AuthError::InvalidCredentials);
        }

        if !bcrypt::verify(password, &user.password_hash).map_err(AuthError::Password)? {
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(token) = repo.find_token_by_user(user.uuid).await? {
            if !self.is_expired(&token, now) {
                return Ok(token);
            }

            debug!(user = %user.username, "replacing expired token");

            let _removed = repo.delete_token(&token.key).await?;
        }

        let new_token = NewAuthToken {
            key: generate_token_key(),
            user_uuid: user.uuid,
            created_at: now,
        };

        match repo.create_token(new_token).await {
            Ok(token) => Ok(token),
            // A concurrent renewal won the insert race; hand back its token.
            Err(AuthRepositoryError::AlreadyExists) => repo
                .find_token_by_user(user.uuid)
                .await?
                .ok_or(AuthError::Repository(AuthRepositoryError::AlreadyExists)),
            Err(error) => Err(error.into()),
        }
    }
}
