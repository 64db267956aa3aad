//! Slots and bookings over the REST datastore.

use std::future::Future;

use chrono::NaiveDate;

use beautycare_app::ports::{BookingRepository, SlotRepository};
use beautycare_domain::booking::Booking;
use beautycare_domain::error::{BeautyCareError, ConflictError};
use beautycare_domain::slot::Slot;
use beautycare_domain::time::format_date;

use crate::client::{Query, RestClient};
use crate::error::RestError;
use crate::rows::{BookingRow, SlotRow};

pub struct RestSlotRepository {
    client: RestClient,
}

impl RestSlotRepository {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

impl SlotRepository for RestSlotRepository {
    /// Returned in whatever order the datastore chooses.
    fn find_open_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Slot>, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            let query = Query::table("available_slots")
                .eq("slot_date", format_date(date))
                .eq("is_blocked", false);
            let rows: Vec<SlotRow> = client.select(&query).await?;
            let slots = rows
                .into_iter()
                .map(Slot::try_from)
                .collect::<Result<Vec<_>, RestError>>()?;
            Ok(slots)
        }
    }
}

/// Relies on the datastore's unique `(booking_date, booking_time)`
/// constraint to reject double bookings.
pub struct RestBookingRepository {
    client: RestClient,
}

impl RestBookingRepository {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

impl BookingRepository for RestBookingRepository {
    fn create(
        &self,
        booking: Booking,
    ) -> impl Future<Output = Result<Booking, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            match client.insert("bookings", &booking).await {
                Ok(()) => Ok(booking),
                Err(err) if err.is_conflict() => Err(ConflictError::SlotUnavailable {
                    date: booking.booking_date,
                    time: booking.booking_time,
                }
                .into()),
                Err(err) => Err(err.into()),
            }
        }
    }

    fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Booking>, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            let query = Query::table("bookings").eq("booking_date", format_date(date));
            let rows: Vec<BookingRow> = client.select(&query).await?;
            Ok(rows.into_iter().map(Booking::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::serve;
    use axum::Router;
    use axum::extract::RawQuery;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use beautycare_domain::booking::BookingRequest;
    use chrono::NaiveTime;
    use serde_json::json;

    #[tokio::test]
    async fn should_ask_only_for_unblocked_slots_on_date() {
        let router = Router::new().route(
            "/available_slots",
            get(|RawQuery(query): RawQuery| async move {
                assert_eq!(
                    query.unwrap_or_default(),
                    "select=*&slot_date=eq.2024-06-01&is_blocked=eq.false"
                );
                axum::Json(json!([{
                    "id": "5a0c7f7e-6a2e-4a7b-8f63-7c1f7b0f4d21",
                    "slot_date": "2024-06-01",
                    "start_time": "09:00:00",
                    "end_time": "10:00:00",
                    "is_blocked": false
                }]))
            }),
        );
        let repo = RestSlotRepository::new(serve(router).await);

        let slots = repo
            .find_open_by_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .await
            .unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].label(), "09:00-10:00");
    }

    #[tokio::test]
    async fn should_map_duplicate_booking_to_conflict() {
        let router = Router::new().route(
            "/bookings",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    axum::Json(json!({ "code": "23505", "message": "duplicate key" })),
                )
            }),
        );
        let repo = RestBookingRepository::new(serve(router).await);
        let booking = BookingRequest {
            service_id: None,
            customer_name: "Priya".to_string(),
            phone: "9876543210".to_string(),
            booking_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            booking_time: NaiveTime::from_hms_opt(10, 0, 0),
            notes: String::new(),
        }
        .into_booking(String::new())
        .unwrap();

        let err = repo.create(booking).await.unwrap_err();
        assert!(matches!(
            err,
            BeautyCareError::Conflict(ConflictError::SlotUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn should_report_server_errors_as_storage_failures() {
        let router = Router::new().route(
            "/bookings",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let repo = RestBookingRepository::new(serve(router).await);

        let err = repo
            .find_by_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, BeautyCareError::Storage(_)));
    }
}
