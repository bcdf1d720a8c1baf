//! Auth data models.

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Marker for [`UserUuid`].
#[derive(Debug)]
pub(crate) struct UserId;

pub(crate) type UserUuid = TypedUuid<UserId>;

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub uuid: UserUuid,
    pub username: String,
    /// bcrypt hash of the primary credential.
    pub password_hash: String,
    pub is_active: bool,
}

/// A bearer token persisted in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthToken {
    /// Opaque 40-character hex key presented by clients.
    pub key: String,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
}

/// New token persistence payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NewAuthToken {
    pub key: String,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
}
