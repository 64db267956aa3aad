//! `SQLite` implementation of [`ServiceRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use beautycare_app::ports::ServiceRepository;
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::id::ServiceId;
use beautycare_domain::service::Service;

use crate::error::StorageError;
use crate::row::decode_error;

/// Wrapper for converting database rows into domain [`Service`].
struct Wrapper(Service);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Service> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let details_json: String = row.try_get("details")?;

        let id = ServiceId::from_str(&id).map_err(decode_error)?;
        let details: Vec<String> = serde_json::from_str(&details_json).map_err(decode_error)?;

        Ok(Self(Service {
            id,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            duration: row.try_get("duration")?,
            price: row.try_get("price")?,
            details,
        }))
    }
}

const INSERT: &str = "INSERT INTO services (id, name, description, category, duration, price, details) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM services WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM services ORDER BY category, rowid";

/// `SQLite`-backed services catalog.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a catalog entry. The site itself never writes services; this is
    /// for seeding and tests.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the insert fails.
    pub async fn insert(&self, service: &Service) -> Result<(), StorageError> {
        let details = serde_json::to_string(&service.details)?;
        sqlx::query(INSERT)
            .bind(service.id.to_string())
            .bind(&service.name)
            .bind(&service.description)
            .bind(&service.category)
            .bind(&service.duration)
            .bind(&service.price)
            .bind(details)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl ServiceRepository for SqliteServiceRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
