//! `SQLite` implementation of [`SlotRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use beautycare_app::ports::SlotRepository;
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::id::SlotId;
use beautycare_domain::slot::Slot;
use beautycare_domain::time::{format_date, format_time};

use crate::error::StorageError;
use crate::row::{date, decode_error, time_of_day};

struct Wrapper(Slot);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let slot_date: String = row.try_get("slot_date")?;
        let start_time: String = row.try_get("start_time")?;
        let end_time: String = row.try_get("end_time")?;

        Ok(Self(Slot {
            id: SlotId::from_str(&id).map_err(decode_error)?,
            slot_date: date(&slot_date)?,
            start_time: time_of_day(&start_time)?,
            end_time: time_of_day(&end_time)?,
            is_blocked: row.try_get("is_blocked")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO available_slots (id, slot_date, start_time, end_time, is_blocked) VALUES (?, ?, ?, ?, ?)";
const SELECT_OPEN_BY_DATE: &str = "SELECT * FROM available_slots WHERE slot_date = ? AND is_blocked = 0 ORDER BY start_time";

/// `SQLite`-backed slot configuration.
pub struct SqliteSlotRepository {
    pool: SqlitePool,
}

impl SqliteSlotRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Configure a slot. Slots are managed outside the site; this is for
    /// seeding and tests.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the insert fails, including the
    /// `start_time < end_time` check.
    pub async fn insert(&self, slot: &Slot) -> Result<(), StorageError> {
        sqlx::query(INSERT)
            .bind(slot.id.to_string())
            .bind(format_date(slot.slot_date))
            .bind(format_time(slot.start_time))
            .bind(format_time(slot.end_time))
            .bind(slot.is_blocked)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

impl SlotRepository for SqliteSlotRepository {
    fn find_open_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Slot>, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_OPEN_BY_DATE)
                .bind(format_date(date))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
