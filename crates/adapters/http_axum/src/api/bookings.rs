//! JSON REST handler for creating bookings.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::booking::Booking;
use beautycare_domain::time::today;

use crate::error::ApiError;
use crate::forms::BookingForm;
use crate::state::AppState;

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Booking>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/bookings`
///
/// Same rules as the booking page: 400 for an incomplete form or a date
/// outside the window, 409 when the time is no longer open.
pub async fn create<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Json(form): Json<BookingForm>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let request = form.to_request()?;
    let booking = state.bookings.submit(request, today()).await?;
    Ok(CreateResponse::Created(Json(booking)))
}
