//! JSON row shapes returned by the datastore.
//!
//! Nullable text columns arrive as `null`; they become empty strings.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use beautycare_domain::booking::Booking;
use beautycare_domain::gallery::GalleryImage;
use beautycare_domain::id::{BookingId, GalleryImageId, ServiceId, SlotId};
use beautycare_domain::service::Service;
use beautycare_domain::slot::Slot;
use beautycare_domain::time::Timestamp;

use crate::error::RestError;

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceRow {
    id: ServiceId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    category: String,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    details: Option<Vec<String>>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            category: row.category,
            duration: row.duration.unwrap_or_default(),
            price: row.price.unwrap_or_default(),
            details: row.details.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GalleryRow {
    id: GalleryImageId,
    url: String,
    category: String,
    #[serde(default)]
    alt_text: Option<String>,
    created_at: Timestamp,
}

impl From<GalleryRow> for GalleryImage {
    fn from(row: GalleryRow) -> Self {
        Self {
            id: row.id,
            url: row.url,
            category: row.category,
            alt_text: row.alt_text.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SlotRow {
    id: SlotId,
    slot_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    #[serde(default)]
    is_blocked: Option<bool>,
}

impl TryFrom<SlotRow> for Slot {
    type Error = RestError;

    fn try_from(row: SlotRow) -> Result<Self, Self::Error> {
        let slot = Self {
            id: row.id,
            slot_date: row.slot_date,
            start_time: row.start_time,
            end_time: row.end_time,
            is_blocked: row.is_blocked.unwrap_or(false),
        };
        slot.validate().map_err(RestError::Row)?;
        Ok(slot)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookingRow {
    id: BookingId,
    #[serde(default)]
    service_id: Option<ServiceId>,
    #[serde(default)]
    service_name: Option<String>,
    customer_name: String,
    phone: String,
    booking_date: NaiveDate,
    booking_time: NaiveTime,
    #[serde(default)]
    notes: Option<String>,
    created_at: Timestamp,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            service_id: row.service_id,
            service_name: row.service_name.unwrap_or_default(),
            customer_name: row.customer_name,
            phone: row.phone,
            booking_date: row.booking_date,
            booking_time: row.booking_time,
            notes: row.notes.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}
