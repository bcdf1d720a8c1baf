//! Homes Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{
    Error, FromRow, PgPool, Postgres, Row,
    error::{DatabaseError, ErrorKind},
    postgres::PgRow,
    query, query_as,
};
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::homes::models::{Home, HomeType, HomeUpdate, HomeUuid, NewHome};

const LIST_HOMES_SQL: &str = include_str!("sql/list_homes.sql");
const GET_HOME_SQL: &str = include_str!("sql/get_home.sql");
const CREATE_HOME_SQL: &str = include_str!("sql/create_home.sql");
const UPDATE_HOME_SQL: &str = include_str!("sql/update_home.sql");
const DELETE_HOME_SQL: &str = include_str!("sql/delete_home.sql");

#[derive(Debug, ThisError)]
pub(crate) enum HomesRepositoryError {
    #[error("home already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for HomesRepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PgHomesRepository {
    pool: PgPool,
}

impl PgHomesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Home {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let hometype: String = row.try_get("hometype")?;

        let hometype: HomeType = hometype.parse().map_err(|e| Error::ColumnDecode {
            index: "hometype".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            name: row.try_get("name")?,
            address: row.try_get("address")?,
            hometype,
        })
    }
}

#[async_trait]
impl HomesRepository for PgHomesRepository {
    async fn list_homes(&self) -> Result<Vec<Home>, HomesRepositoryError> {
        query_as::<Postgres, Home>(LIST_HOMES_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_home(&self, home: HomeUuid) -> Result<Option<Home>, HomesRepositoryError> {
        query_as::<Postgres, Home>(GET_HOME_SQL)
            .bind(home.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_home(&self, home: NewHome) -> Result<Home, HomesRepositoryError> {
        query_as::<Postgres, Home>(CREATE_HOME_SQL)
            .bind(home.uuid.into_uuid())
            .bind(&home.name)
            .bind(&home.address)
            .bind(home.hometype.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_home(
        &self,
        home: HomeUuid,
        update: HomeUpdate,
    ) -> Result<Option<Home>, HomesRepositoryError> {
        query_as::<Postgres, Home>(UPDATE_HOME_SQL)
            .bind(home.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.address.as_deref())
            .bind(update.hometype.map(HomeType::as_str))
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_home(&self, home: HomeUuid) -> Result<u64, HomesRepositoryError> {
        let result = query(DELETE_HOME_SQL)
            .bind(home.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(HomesRepositoryError::from)?;

        Ok(result.rows_affected())
    }
}

#[automock]
#[async_trait]
pub(crate) trait HomesRepository: Send + Sync {
    async fn list_homes(&self) -> Result<Vec<Home>, HomesRepositoryError>;
    async fn get_home(&self, home: HomeUuid) -> Result<Option<Home>, HomesRepositoryError>;
    async fn create_home(&self, home: NewHome) -> Result<Home, HomesRepositoryError>;

    /// Apply a partial update, returning `None` when the home does not exist.
    async fn update_home(
        &self,
        home: HomeUuid,
        update: HomeUpdate,
    ) -> Result<Option<Home>, HomesRepositoryError>;

    /// Delete a home, returning the number of rows removed. Humans living in
    /// the home and their cats go with it (cascade).
    async fn delete_home(&self, home: HomeUuid) -> Result<u64, HomesRepositoryError>;
}
