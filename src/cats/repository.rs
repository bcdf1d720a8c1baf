//! Cats Repository

use async_trait::async_trait;
use jiff_sqlx::Date as SqlxDate;
use mockall::automock;
use sqlx::{
    Error, FromRow, PgPool, Postgres, Row,
    error::{DatabaseError, ErrorKind},
    postgres::PgRow,
    query, query_as,
};
use thiserror::Error as ThisError;
use uuid::Uuid;

use crate::{
    breeds::models::BreedUuid,
    cats::models::{Cat, CatUpdate, CatUuid, NewCat},
    humans::models::HumanUuid,
};

const LIST_CATS_SQL: &str = include_str!("sql/list_cats.sql");
const LIST_CATS_BY_BREED_SQL: &str = include_str!("sql/list_cats_by_breed.sql");
const LIST_CATS_BY_OWNER_SQL: &str = include_str!("sql/list_cats_by_owner.sql");
const GET_CAT_SQL: &str = include_str!("sql/get_cat.sql");
const CREATE_CAT_SQL: &str = include_str!("sql/create_cat.sql");
const UPDATE_CAT_SQL: &str = include_str!("sql/update_cat.sql");
const DELETE_CAT_SQL: &str = include_str!("sql/delete_cat.sql");

#[derive(Debug, ThisError)]
pub(crate) enum CatsRepositoryError {
    #[error("cat already exists")]
    AlreadyExists,

    /// The referenced breed or owner does not exist.
    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CatsRepositoryError {
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
pub(crate) struct PgCatsRepository {
    pool: PgPool,
}

impl PgCatsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Cat {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let gender: String = row.try_get("gender")?;

        Ok(Self {
            uuid: row.try_get::<Uuid, _>("uuid")?.into(),
            name: row.try_get("name")?,
            gender: gender.parse().map_err(|source| Error::ColumnDecode {
                index: "gender".to_string(),
                source: Box::new(source),
            })?,
            date_of_birth: row.try_get::<SqlxDate, _>("date_of_birth")?.to_jiff(),
            description: row.try_get("description")?,
            breed_uuid: row.try_get::<Uuid, _>("breed_uuid")?.into(),
            owner_uuid: row.try_get::<Uuid, _>("owner_uuid")?.into(),
        })
    }
}

#[async_trait]
impl CatsRepository for PgCatsRepository {
    async fn list_cats(&self) -> Result<Vec<Cat>, CatsRepositoryError> {
        query_as::<Postgres, Cat>(LIST_CATS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_cats_by_breed(&self, breed: BreedUuid) -> Result<Vec<Cat>, CatsRepositoryError> {
        query_as::<Postgres, Cat>(LIST_CATS_BY_BREED_SQL)
            .bind(breed.into_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_cats_by_owner(&self, owner: HumanUuid) -> Result<Vec<Cat>, CatsRepositoryError> {
        query_as::<Postgres, Cat>(LIST_CATS_BY_OWNER_SQL)
            .bind(owner.into_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_cat(&self, cat: CatUuid) -> Result<Option<Cat>, CatsRepositoryError> {
        query_as::<Postgres, Cat>(GET_CAT_SQL)
            .bind(cat.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_cat(&self, cat: NewCat) -> Result<Cat, CatsRepositoryError> {
        query_as::<Postgres, Cat>(CREATE_CAT_SQL)
            .bind(cat.uuid.into_uuid())
            .bind(&cat.name)
            .bind(cat.gender.as_str())
            .bind(SqlxDate::from(cat.date_of_birth))
            .bind(&cat.description)
            .bind(cat.breed_uuid.into_uuid())
            .bind(cat.owner_uuid.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_cat(
        &self,
        cat: CatUuid,
        update: CatUpdate,
    ) -> Result<Option<Cat>, CatsRepositoryError> {
        query_as::<Postgres, Cat>(UPDATE_CAT_SQL)
            .bind(cat.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.gender.map(|gender| gender.as_str()))
            .bind(update.date_of_birth.map(SqlxDate::from))
            .bind(update.description.as_deref())
            .bind(update.breed_uuid.map(BreedUuid::into_uuid))
            .bind(update.owner_uuid.map(HumanUuid::into_uuid))
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_cat(&self, cat: CatUuid) -> Result<u64, CatsRepositoryError> {
        let result = query(DELETE_CAT_SQL)
            .bind(cat.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(CatsRepositoryError::from)?;

        Ok(result.rows_affected())
    }
}

#[automock]
#[async_trait]
pub(crate) trait CatsRepository: Send + Sync {
    async fn list_cats(&self) -> Result<Vec<Cat>, CatsRepositoryError>;

    /// All cats of one breed.
    async fn list_cats_by_breed(&self, breed: BreedUuid) -> Result<Vec<Cat>, CatsRepositoryError>;

    /// All cats owned by one human.
    async fn list_cats_by_owner(&self, owner: HumanUuid) -> Result<Vec<Cat>, CatsRepositoryError>;

    async fn get_cat(&self, cat: CatUuid) -> Result<Option<Cat>, CatsRepositoryError>;
    async fn create_cat(&self, cat: NewCat) -> Result<Cat, CatsRepositoryError>;

    /// Apply a partial update, returning `None` when the cat does not exist.
    async fn update_cat(
        &self,
        cat: CatUuid,
        update: CatUpdate,
    ) -> Result<Option<Cat>, CatsRepositoryError>;

    /// Delete a cat, returning the number of rows removed.
    async fn delete_cat(&self, cat: CatUuid) -> Result<u64, CatsRepositoryError>;
}
