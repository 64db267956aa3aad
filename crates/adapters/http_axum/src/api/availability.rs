//! JSON REST handler for open booking windows.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_app::services::availability_service::AvailabilityLookup;
use beautycare_domain::id::SlotId;
use beautycare_domain::slot::Slot;
use beautycare_domain::time::{format_date, format_short_time, parse_date};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub date: String,
    /// Issued by the client when it sends the request; echoed as `sequence`.
    #[serde(default)]
    pub seq: u64,
}

/// One open window. Times are `HH:MM`; `start_time` is what a booking sends
/// back as `booking_time`.
#[derive(Debug, Serialize)]
pub struct WindowBody {
    pub id: SlotId,
    pub start_time: String,
    pub end_time: String,
    pub label: String,
}

impl From<&Slot> for WindowBody {
    fn from(slot: &Slot) -> Self {
        Self {
            id: slot.id,
            start_time: format_short_time(slot.start_time),
            end_time: format_short_time(slot.end_time),
            label: slot.label(),
        }
    }
}

/// `sequence` echoes the request's `seq`. Clients that fire several lookups
/// keep only the body carrying the highest `seq` they have sent.
#[derive(Debug, Serialize)]
pub struct AvailabilityBody {
    pub sequence: u64,
    pub date: String,
    pub slots: Vec<WindowBody>,
}

impl From<AvailabilityLookup> for AvailabilityBody {
    fn from(lookup: AvailabilityLookup) -> Self {
        Self {
            sequence: lookup.sequence,
            date: format_date(lookup.date),
            slots: lookup.slots.iter().map(WindowBody::from).collect(),
        }
    }
}

/// `GET /api/availability?date=YYYY-MM-DD&seq=N`
pub async fn lookup<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityBody>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let date = parse_date(&query.date)?;
    let lookup = state.availability.lookup(date, query.seq).await?;
    Ok(Json(lookup.into()))
}
