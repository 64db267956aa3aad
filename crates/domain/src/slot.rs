//! Slot: a configured bookable window on a specific date.
//!
//! Slots define capacity independently of demand; bookings consume them by
//! start time.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{BeautyCareError, ValidationError};
use crate::id::SlotId;
use crate::time::format_short_time;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: SlotId,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_blocked: bool,
}

impl Slot {
    /// Create an open (unblocked) slot.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] unless `start < end`.
    pub fn open(
        slot_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, BeautyCareError> {
        let slot = Self {
            id: SlotId::new(),
            slot_date,
            start_time,
            end_time,
            is_blocked: false,
        };
        slot.validate()?;
        Ok(slot)
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimeRange`] unless `start < end`.
    pub fn validate(&self) -> Result<(), BeautyCareError> {
        if self.start_time >= self.end_time {
            return Err(ValidationError::InvalidTimeRange.into());
        }
        Ok(())
    }

    /// Mark the slot as unavailable regardless of bookings.
    #[must_use]
    pub fn blocked(mut self) -> Self {
        self.is_blocked = true;
        self
    }

    /// `HH:MM-HH:MM`, as shown in the time selector.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            format_short_time(self.start_time),
            format_short_time(self.end_time)
        )
    }

    /// Value submitted by the time selector.
    #[must_use]
    pub fn start_value(&self) -> String {
        format_short_time(self.start_time)
    }
}
