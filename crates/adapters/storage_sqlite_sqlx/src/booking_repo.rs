//! `SQLite` implementation of [`BookingRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use beautycare_app::ports::BookingRepository;
use beautycare_domain::booking::Booking;
use beautycare_domain::error::{BeautyCareError, ConflictError};
use beautycare_domain::id::{BookingId, ServiceId};
use beautycare_domain::time::{format_date, format_time};

use crate::error::StorageError;
use crate::row::{date, decode_error, time_of_day, timestamp};

struct Wrapper(Booking);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let service_id: Option<String> = row.try_get("service_id")?;
        let booking_date: String = row.try_get("booking_date")?;
        let booking_time: String = row.try_get("booking_time")?;
        let created_at: String = row.try_get("created_at")?;

        let service_id = service_id
            .as_deref()
            .map(ServiceId::from_str)
            .transpose()
            .map_err(decode_error)?;

        Ok(Self(Booking {
            id: BookingId::from_str(&id).map_err(decode_error)?,
            service_id,
            service_name: row.try_get("service_name")?,
            customer_name: row.try_get("customer_name")?,
            phone: row.try_get("phone")?,
            booking_date: date(&booking_date)?,
            booking_time: time_of_day(&booking_time)?,
            notes: row.try_get("notes")?,
            created_at: timestamp(&created_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO bookings (id, service_id, service_name, customer_name, phone, booking_date, booking_time, notes, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_DATE: &str = "SELECT * FROM bookings WHERE booking_date = ? ORDER BY booking_time";

/// `SQLite`-backed booking store.
///
/// The table's unique `(booking_date, booking_time)` pair is what finally
/// rejects a double booking.
pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BookingRepository for SqliteBookingRepository {
    fn create(
        &self,
        booking: Booking,
    ) -> impl Future<Output = Result<Booking, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(booking.id.to_string())
                .bind(booking.service_id.map(|id| id.to_string()))
                .bind(&booking.service_name)
                .bind(&booking.customer_name)
                .bind(&booking.phone)
                .bind(format_date(booking.booking_date))
                .bind(format_time(booking.booking_time))
                .bind(&booking.notes)
                .bind(booking.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from);

            match result {
                Ok(_) => Ok(booking),
                Err(err) if err.is_unique_violation() => {
                    tracing::debug!(
                        date = %booking.booking_date,
                        time = %booking.booking_time,
                        "booking rejected by unique constraint"
                    );
                    Err(ConflictError::SlotUnavailable {
                        date: booking.booking_date,
                        time: booking.booking_time,
                    }
                    .into())
                }
                Err(err) => Err(err.into()),
            }
        }
    }

    fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Booking>, BeautyCareError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_DATE)
                .bind(format_date(date))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
