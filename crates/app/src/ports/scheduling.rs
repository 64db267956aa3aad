//! Scheduling ports: configured slots and the bookings that consume them.

use std::future::Future;

use chrono::NaiveDate;

use beautycare_domain::booking::Booking;
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::slot::Slot;

/// Read access to the `available_slots` table.
pub trait SlotRepository {
    /// Unblocked slots configured for `date`, in the datastore's order.
    fn find_open_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Slot>, BeautyCareError>> + Send;
}

/// Access to the `bookings` table.
pub trait BookingRepository {
    /// Insert a new booking.
    ///
    /// Implementations that can detect a second booking for the same date
    /// and start time report it as
    /// [`BeautyCareError::Conflict`](beautycare_domain::error::BeautyCareError::Conflict).
    fn create(&self, booking: Booking)
    -> impl Future<Output = Result<Booking, BeautyCareError>> + Send;

    /// Every booking recorded for `date`.
    fn find_by_date(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Booking>, BeautyCareError>> + Send;
}
