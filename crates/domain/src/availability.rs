//! Availability: which windows a customer may still pick on a given date.

use std::collections::HashSet;

use chrono::{Days, NaiveDate, NaiveTime};

use crate::booking::Booking;
use crate::error::ValidationError;
use crate::slot::Slot;

/// How far ahead customers may book.
pub const BOOKING_HORIZON_DAYS: u64 = 30;

/// Slots not yet taken: unblocked slots whose start time matches no
/// existing booking's start time.
///
/// Keeps the order in which `slots` were given; no re-sorting.
#[must_use]
pub fn available_windows(slots: Vec<Slot>, bookings: &[Booking]) -> Vec<Slot> {
    let taken = booked_times(bookings);
    slots
        .into_iter()
        .filter(|slot| !slot.is_blocked && !taken.contains(&slot.start_time))
        .collect()
}

/// Start times already reserved.
#[must_use]
pub fn booked_times(bookings: &[Booking]) -> HashSet<NaiveTime> {
    bookings.iter().map(|b| b.booking_time).collect()
}

/// Dates open for booking: today through today + [`BOOKING_HORIZON_DAYS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl BookingWindow {
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            first: today,
            last: today
                .checked_add_days(Days::new(BOOKING_HORIZON_DAYS))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.first..=self.last).contains(&date)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::DateOutOfRange`] when `date` is outside the window.
    pub fn check(&self, date: NaiveDate) -> Result<NaiveDate, ValidationError> {
        if self.contains(date) {
            Ok(date)
        } else {
            Err(ValidationError::DateOutOfRange(date))
        }
    }
}
