//! Booking service: validates the appointment form and persists a reservation.

use std::sync::Arc;

use chrono::NaiveDate;

use beautycare_domain::availability::BookingWindow;
use beautycare_domain::booking::{Booking, BookingRequest};
use beautycare_domain::error::{BeautyCareError, ValidationError};
use beautycare_domain::notification::Notification;
use beautycare_domain::time::{format_date, format_time};

use crate::ports::{BookingRepository, ServiceRepository, SlotRepository};
use crate::services::availability_service::AvailabilityService;
use crate::services::catalog_service::CatalogService;

/// Application service behind the booking form.
///
/// There is no idempotency key: submitting the same form twice inserts
/// twice unless the datastore rejects the second insert.
pub struct BookingService<SR, SL, BR> {
    catalog: Arc<CatalogService<SR>>,
    availability: Arc<AvailabilityService<SL, BR>>,
}

impl<SR, SL, BR> BookingService<SR, SL, BR>
where
    SR: ServiceRepository,
    SL: SlotRepository,
    BR: BookingRepository,
{
    pub fn new(
        catalog: Arc<CatalogService<SR>>,
        availability: Arc<AvailabilityService<SL, BR>>,
    ) -> Self {
        Self {
            catalog,
            availability,
        }
    }

    /// Validate and persist one booking, with `today` anchoring the
    /// bookable date range.
    ///
    /// Missing date or time fails before any datastore call.
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::Validation`] for an incomplete form or a
    /// date outside the window, [`BeautyCareError::Conflict`] when the
    /// chosen time is not open, or a storage error.
    pub async fn submit(
        &self,
        request: BookingRequest,
        today: NaiveDate,
    ) -> Result<Booking, BeautyCareError> {
        let (date, _) = request.validate()?;
        BookingWindow::starting(today).check(date)?;

        let service_name = self.catalog.service_name(request.service_id).await;
        let booking = request.into_booking(service_name)?;

        match self.availability.reserve(booking).await {
            Ok(booking) => {
                tracing::info!(
                    booking_id = %booking.id,
                    date = %format_date(booking.booking_date),
                    time = %format_time(booking.booking_time),
                    service = %booking.service_name,
                    "booking created"
                );
                Ok(booking)
            }
            Err(err) => {
                tracing::warn!(error = %err, date = %format_date(date), "booking rejected");
                Err(err)
            }
        }
    }
}

/// Toast shown after a booking attempt.
#[must_use]
pub fn notification_for(result: &Result<Booking, BeautyCareError>) -> Notification {
    match result {
        Ok(_) => Notification::booking_confirmed(),
        Err(BeautyCareError::Validation(ValidationError::MissingDateTime)) => {
            Notification::missing_information()
        }
        Err(BeautyCareError::Validation(err)) => Notification::invalid_input(&err.to_string()),
        Err(BeautyCareError::Conflict(_)) => Notification::slot_taken(),
        Err(BeautyCareError::NotFound(_) | BeautyCareError::Storage(_)) => {
            Notification::booking_failed()
        }
    }
}
