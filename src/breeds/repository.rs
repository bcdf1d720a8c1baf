//! Breeds Repository

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

use crate::breeds::models::{Breed, BreedUpdate, BreedUuid, NewBreed};

const LIST_BREEDS_SQL: &str = include_str!("sql/list_breeds.sql");
const GET_BREED_SQL: &str = include_str!("sql/get_breed.sql");
const CREATE_BREED_SQL: &str = include_str!("sql/create_breed.sql");
const UPDATE_BREED_SQL: &str = include_str!("sql/update_breed.sql");
const DELETE_BREED_SQL: &str = include_str!("sql/delete_breed.sql");

#[derive(Debug, ThisError)]
pub(crate) enum BreedsRepositoryError {
    /// The unique breed-name constraint fired.
    #[error("breed already exists")]
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

impl From<Error> for BreedsRepositoryError {
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
pub(crate) struct PgBreedsRepository {
    pool: PgPool,
}

impl PgBreedsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Breed {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            name: row.try_get("name")?,
            origin: row.try_get("origin")?,
            description: row.try_get("description")?,
        })
    }
}

#[async_trait]
impl BreedsRepository for PgBreedsRepository {
    async fn list_breeds(&self) -> Result<Vec<Breed>, BreedsRepositoryError> {
        query_as::<Postgres, Breed>(LIST_BREEDS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_breed(&self, breed: BreedUuid) -> Result<Option<Breed>, BreedsRepositoryError> {
        query_as::<Postgres, Breed>(GET_BREED_SQL)
            .bind(breed.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_breed(&self, breed: NewBreed) -> Result<Breed, BreedsRepositoryError> {
        query_as::<Postgres, Breed>(CREATE_BREED_SQL)
            .bind(breed.uuid.into_uuid())
            .bind(&breed.name)
            .bind(&breed.origin)
            .bind(&breed.description)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_breed(
        &self,
        breed: BreedUuid,
        update: BreedUpdate,
    ) -> Result<Option<Breed>, BreedsRepositoryError> {
        query_as::<Postgres, Breed>(UPDATE_BREED_SQL)
            .bind(breed.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.origin.as_deref())
            .bind(update.description.as_deref())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_breed(&self, breed: BreedUuid) -> Result<u64, BreedsRepositoryError> {
        let result = query(DELETE_BREED_SQL)
            .bind(breed.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(BreedsRepositoryError::from)?;

        Ok(result.rows_affected())
    }
}

#[automock]
#[async_trait]
pub(crate) trait BreedsRepository: Send + Sync {
    async fn list_breeds(&self) -> Result<Vec<Breed>, BreedsRepositoryError>;
    async fn get_breed(&self, breed: BreedUuid) -> Result<Option<Breed>, BreedsRepositoryError>;
    async fn create_breed(&self, breed: NewBreed) -> Result<Breed, BreedsRepositoryError>;

    /// Apply a partial update, returning `None` when the breed does not exist.
    async fn update_breed(
        &self,
        breed: BreedUuid,
        update: BreedUpdate,
    ) -> Result<Option<Breed>, BreedsRepositoryError>;

    /// Delete a breed, returning the number of rows removed. Cats of the
    /// breed go with it (cascade).
    async fn delete_breed(&self, breed: BreedUuid) -> Result<u64, BreedsRepositoryError>;
}
