//! Auth repository.

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{
    Error, FromRow, PgPool, Postgres, Row,
    error::{DatabaseError, ErrorKind},
    postgres::PgRow,
    query, query_as,
};
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::auth::models::{AuthToken, NewAuthToken, User, UserUuid};

const FIND_TOKEN_BY_KEY_SQL: &str = include_str!("sql/find_token_by_key.sql");
const FIND_TOKEN_BY_USER_SQL: &str = include_str!("sql/find_token_by_user.sql");
const FIND_USER_SQL: &str = include_str!("sql/find_user.sql");
const FIND_USER_BY_USERNAME_SQL: &str = include_str!("sql/find_user_by_username.sql");
const CREATE_TOKEN_SQL: &str = include_str!("sql/create_token.sql");
const DELETE_TOKEN_SQL: &str = include_str!("sql/delete_token.sql");

#[derive(Debug, ThisError)]
pub(crate) enum AuthRepositoryError {
    /// The one-token-per-user constraint fired: a concurrent renewal won.
    #[error("token already exists for this user")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AuthRepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for AuthToken {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            key: row.try_get("key")?,
            user_uuid: row.try_get::<Uuid, _>("user_uuid")?.into(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            is_active: row.try_get("is_active")?,
        })
    }
}

#[async_trait]
impl AuthRepository for PgAuthRepository {
    async fn find_token_by_key(
        &self,
        key: &str,
    ) -> Result<Option<AuthToken>, AuthRepositoryError> {
        query_as::<Postgres, AuthToken>(FIND_TOKEN_BY_KEY_SQL)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_token_by_user(
        &self,
        user: UserUuid,
    ) -> Result<Option<AuthToken>, AuthRepositoryError> {
        query_as::<Postgres, AuthToken>(FIND_TOKEN_BY_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_user(&self, user: UserUuid) -> Result<Option<User>, AuthRepositoryError> {
        query_as::<Postgres, User>(FIND_USER_SQL)
            .bind(user.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, AuthRepositoryError> {
        query_as::<Postgres, User>(FIND_USER_BY_USERNAME_SQL)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_token(&self, token: NewAuthToken) -> Result<AuthToken, AuthRepositoryError> {
        query_as::<Postgres, AuthToken>(CREATE_TOKEN_SQL)
            .bind(&token.key)
            .bind(token.user_uuid.into_uuid())
            .bind(SqlxTimestamp::from(token.created_at))
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_token(&self, key: &str) -> Result<u64, AuthRepositoryError> {
        let result = query(DELETE_TOKEN_SQL)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(AuthRepositoryError::from)?;

        Ok(result.rows_affected())
    }
}

#[automock]
#[async_trait]
pub(crate) trait AuthRepository: Send + Sync {
    /// Look up a token by its presented key.
    async fn find_token_by_key(&self, key: &str)
    -> Result<Option<AuthToken>, AuthRepositoryError>;

    /// Look up the (at most one) token owned by a user.
    async fn find_token_by_user(
        &self,
        user: UserUuid,
    ) -> Result<Option<AuthToken>, AuthRepositoryError>;

    /// Resolve a token's owning principal.
    async fn find_user(&self, user: UserUuid) -> Result<Option<User>, AuthRepositoryError>;

    /// Resolve a principal by login name.
    async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, AuthRepositoryError>;

    async fn create_token(&self, token: NewAuthToken) -> Result<AuthToken, AuthRepositoryError>;

    /// Delete a token by key, returning the number of rows removed.
    async fn delete_token(&self, key: &str) -> Result<u64, AuthRepositoryError>;
}
