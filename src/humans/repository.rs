//! Humans Repository

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
    homes::models::HomeUuid,
    humans::models::{Human, HumanUpdate, HumanUuid, NewHuman},
};

const LIST_HUMANS_SQL: &str = include_str!("sql/list_humans.sql");
const LIST_HUMANS_BY_UUIDS_SQL: &str = include_str!("sql/list_humans_by_uuids.sql");
const GET_HUMAN_SQL: &str = include_str!("sql/get_human.sql");
const CREATE_HUMAN_SQL: &str = include_str!("sql/create_human.sql");
const UPDATE_HUMAN_SQL: &str = include_str!("sql/update_human.sql");
const DELETE_HUMAN_SQL: &str = include_str!("sql/delete_human.sql");

#[derive(Debug, ThisError)]
pub(crate) enum HumansRepositoryError {
    #[error("human already exists")]
    AlreadyExists,

    /// The referenced home does not exist.
    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for HumansRepositoryError {
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
pub(crate) struct PgHumansRepository {
    pool: PgPool,
}

impl PgHumansRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for Human {
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
            home_uuid: row.try_get::<Uuid, _>("home_uuid")?.into(),
        })
    }
}

#[async_trait]
impl HumansRepository for PgHumansRepository {
    async fn list_humans(&self) -> Result<Vec<Human>, HumansRepositoryError> {
        query_as::<Postgres, Human>(LIST_HUMANS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_humans_by_uuids(
        &self,
        humans: Vec<HumanUuid>,
    ) -> Result<Vec<Human>, HumansRepositoryError> {
        let uuids: Vec<Uuid> = humans.into_iter().map(HumanUuid::into_uuid).collect();

        query_as::<Postgres, Human>(LIST_HUMANS_BY_UUIDS_SQL)
            .bind(uuids)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_human(&self, human: HumanUuid) -> Result<Option<Human>, HumansRepositoryError> {
        query_as::<Postgres, Human>(GET_HUMAN_SQL)
            .bind(human.into_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn create_human(&self, human: NewHuman) -> Result<Human, HumansRepositoryError> {
        query_as::<Postgres, Human>(CREATE_HUMAN_SQL)
            .bind(human.uuid.into_uuid())
            .bind(&human.name)
            .bind(human.gender.as_str())
            .bind(SqlxDate::from(human.date_of_birth))
            .bind(&human.description)
            .bind(human.home_uuid.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_human(
        &self,
        human: HumanUuid,
        update: HumanUpdate,
    ) -> Result<Option<Human>, HumansRepositoryError> {
        query_as::<Postgres, Human>(UPDATE_HUMAN_SQL)
            .bind(human.into_uuid())
            .bind(update.name.as_deref())
            .bind(update.gender.map(|gender| gender.as_str()))
            .bind(update.date_of_birth.map(SqlxDate::from))
            .bind(update.description.as_deref())
            .bind(update.home_uuid.map(HomeUuid::into_uuid))
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_human(&self, human: HumanUuid) -> Result<u64, HumansRepositoryError> {
        let result = query(DELETE_HUMAN_SQL)
            .bind(human.into_uuid())
            .execute(&self.pool)
            .await
            .map_err(HumansRepositoryError::from)?;

        Ok(result.rows_affected())
    }
}

#[automock]
#[async_trait]
pub(crate) trait HumansRepository: Send + Sync {
    async fn list_humans(&self) -> Result<Vec<Human>, HumansRepositoryError>;

    /// Fetch the humans matching the given UUIDs. Unknown UUIDs are skipped.
    async fn list_humans_by_uuids(
        &self,
        humans: Vec<HumanUuid>,
    ) -> Result<Vec<Human>, HumansRepositoryError>;

    async fn get_human(&self, human: HumanUuid) -> Result<Option<Human>, HumansRepositoryError>;
    async fn create_human(&self, human: NewHuman) -> Result<Human, HumansRepositoryError>;

    /// Apply a partial update, returning `None` when the human does not exist.
    async fn update_human(
        &self,
        human: HumanUuid,
        update: HumanUpdate,
    ) -> Result<Option<Human>, HumansRepositoryError>;

    /// Delete a human, returning the number of rows removed. The human's
    /// cats go with them (cascade).
    async fn delete_human(&self, human: HumanUuid) -> Result<u64, HumansRepositoryError>;
}
