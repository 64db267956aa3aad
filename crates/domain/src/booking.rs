//! Booking: a customer's reservation of one slot.
//!
//! Bookings are created by the booking form and never updated or deleted
//! by this application.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{BeautyCareError, ValidationError};
use crate::id::{BookingId, ServiceId};
use crate::time::{Timestamp, now};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub service_id: Option<ServiceId>,
    pub service_name: String,
    pub customer_name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    /// Start time of the reserved slot.
    pub booking_time: NaiveTime,
    pub notes: String,
    pub created_at: Timestamp,
}

/// What the booking form holds before submission.
///
/// Date and time are optional because the visitor may not have picked them
/// yet; every other field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub service_id: Option<ServiceId>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
    #[serde(default)]
    pub booking_time: Option<NaiveTime>,
    #[serde(default)]
    pub notes: String,
}

impl BookingRequest {
    /// Check that the form can be submitted, returning the chosen date and time.
    ///
    /// Date and time are checked first: a request without them never
    /// reaches the datastore.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingDateTime`] when either is unset, or
    /// an empty-field error for name and phone.
    pub fn validate(&self) -> Result<(NaiveDate, NaiveTime), ValidationError> {
        let (Some(date), Some(time)) = (self.booking_date, self.booking_time) else {
            return Err(ValidationError::MissingDateTime);
        };
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyPhone);
        }
        Ok((date, time))
    }

    /// Turn the form into a new booking record.
    ///
    /// # Errors
    ///
    /// Propagates [`BookingRequest::validate`] failures.
    pub fn into_booking(self, service_name: String) -> Result<Booking, BeautyCareError> {
        let (booking_date, booking_time) = self.validate()?;
        Ok(Booking {
            id: BookingId::new(),
            service_id: self.service_id,
            service_name,
            customer_name: self.customer_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            booking_date,
            booking_time,
            notes: self.notes,
            created_at: now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingRequest {
        BookingRequest {
            service_id: Some(ServiceId::new()),
            customer_name: " Priya ".to_string(),
            phone: "9876543210".to_string(),
            booking_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            booking_time: NaiveTime::from_hms_opt(10, 0, 0),
            notes: "First visit".to_string(),
        }
    }

    #[test]
    fn should_require_date_before_anything_else() {
        let request = BookingRequest {
            booking_date: None,
            customer_name: String::new(),
            ..filled()
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingDateTime));
    }

    #[test]
    fn should_require_time() {
        let request = BookingRequest {
            booking_time: None,
            ..filled()
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingDateTime));
    }

    #[test]
    fn should_require_phone() {
        let request = BookingRequest {
            phone: "  ".to_string(),
            ..filled()
        };
        assert_eq!(request.validate(), Err(ValidationError::EmptyPhone));
    }

    #[test]
    fn should_build_booking_with_trimmed_fields() {
        let booking = filled().into_booking("Haircut".to_string()).unwrap();
        assert_eq!(booking.customer_name, "Priya");
        assert_eq!(booking.service_name, "Haircut");
        assert_eq!(booking.booking_time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(booking.notes, "First visit");
    }
}
