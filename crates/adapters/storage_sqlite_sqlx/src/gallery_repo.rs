//! `SQLite` implementation of [`GalleryRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use beautycare_app::ports::GalleryRepository;
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::gallery::GalleryImage;
use beautycare_domain::id::GalleryImageId;

use crate::error::StorageError;
use crate::row::{decode_error, timestamp};

struct Wrapper(GalleryImage);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(Self(GalleryImage {
            id: GalleryImageId::from_str(&id).map_err(decode_error)?,
            url: row.try_get("url")?,
            category: row.try_get("category")?,
            alt_text: row.try_get("alt_text")?,
            created_at: timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO gallery_images (id, url, category, alt_text, created_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT * FROM gallery_images ORDER BY created_at DESC";

/// `SQLite`-backed gallery.
pub struct SqliteGalleryRepository {
    pool: SqlitePool,
}

impl SqliteGalleryRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add an image; for seeding and tests.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the insert fails.
    pub async fn insert(&self, image: &GalleryImage) -> Result<(), StorageError> {
        sqlx::query(INSERT)
            .bind(image.id.to_string())
            .bind(&image.url)
            .bind(&image.category)
            .bind(&image.alt_text)
            .bind(image.created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl GalleryRepository for SqliteGalleryRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<GalleryImage>, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
