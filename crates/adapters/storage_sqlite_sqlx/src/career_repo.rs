//! `SQLite` implementation of [`CareerApplicationRepository`].

use std::future::Future;

use sqlx::SqlitePool;

use beautycare_app::ports::CareerApplicationRepository;
use beautycare_domain::career::CareerApplication;
use beautycare_domain::error::BeautyCareError;

use crate::error::StorageError;

const INSERT: &str = "INSERT INTO career_applications (id, name, phone, experience_years, skills, message, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)";

/// `SQLite`-backed application inbox. Skills are stored as a JSON array.
pub struct SqliteCareerApplicationRepository {
    pool: SqlitePool,
}

impl SqliteCareerApplicationRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CareerApplicationRepository for SqliteCareerApplicationRepository {
    fn create(
        &self,
        application: CareerApplication,
    ) -> impl Future<Output = Result<CareerApplication, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let skills = serde_json::to_string(&application.skills).map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(application.id.to_string())
                .bind(&application.name)
                .bind(&application.phone)
                .bind(i64::from(application.experience_years))
                .bind(skills)
                .bind(&application.message)
                .bind(application.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(application)
        }
    }
}
