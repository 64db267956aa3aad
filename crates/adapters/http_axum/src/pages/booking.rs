//! Booking page: pick a service, a date and an open window, then submit.
//!
//! Choosing a date is a GET round trip (`formmethod="get"` on the "check
//! availability" button), so the open windows are listed without scripts.
//! The final submit is a POST that redirects to `?status=confirmed`.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use beautycare_app::outcome::ReadOutcome;
use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_app::services::booking_service::notification_for;
use beautycare_domain::availability::BookingWindow;
use beautycare_domain::category::CategoryFilter;
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::notification::Notification;
use beautycare_domain::time::{format_date, format_short_time, parse_date, parse_time, today};

use crate::error::status_for;
use crate::forms::BookingForm;
use crate::state::AppState;

/// Query string of `GET /booking`. Besides `date`, `service_id` and
/// `status`, the date check carries the rest of the form along.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingQuery {
    #[serde(alias = "booking_date")]
    pub date: String,
    pub service_id: String,
    pub customer_name: String,
    pub phone: String,
    pub notes: String,
    pub status: String,
}

impl From<BookingQuery> for BookingForm {
    fn from(query: BookingQuery) -> Self {
        Self {
            service_id: query.service_id,
            customer_name: query.customer_name,
            phone: query.phone,
            booking_date: query.date,
            booking_time: String::new(),
            notes: query.notes,
        }
    }
}

pub struct ServiceOption {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

pub struct WindowOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Booking page template.
#[derive(Template)]
#[template(path = "booking.html")]
pub struct BookingTemplate {
    form: BookingForm,
    services: Vec<ServiceOption>,
    services_unavailable: bool,
    min_date: String,
    max_date: String,
    date_chosen: bool,
    windows: Vec<WindowOption>,
    windows_unavailable: bool,
    toast: Option<Notification>,
}

impl IntoResponse for BookingTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the booking form handler (PRG pattern).
pub enum SubmitResponse {
    /// Booking stored; show the clean form with a confirmation.
    Redirect(Redirect),
    /// Re-render the form with the submitted values and a toast.
    Rejected(StatusCode, BookingTemplate),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Rejected(status, page) => (status, page).into_response(),
        }
    }
}

async fn render<SR, GR, SL, BR, CR>(
    state: &AppState<SR, GR, SL, BR, CR>,
    form: BookingForm,
    mut toast: Option<Notification>,
) -> BookingTemplate
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let window = BookingWindow::starting(today());

    let (services, services_unavailable) = match state.catalog.browse(CategoryFilter::All).await {
        ReadOutcome::Ready(view) => {
            let selected = form.service_id.trim();
            let options = view
                .records
                .iter()
                .map(|service| ServiceOption {
                    id: service.id.to_string(),
                    label: format!("{} - {}", service.name, service.price),
                    selected: service.id.to_string() == selected,
                })
                .collect();
            (options, false)
        }
        ReadOutcome::Unavailable => (Vec::new(), true),
    };

    let chosen_time = parse_time(&form.booking_time).ok();
    let mut windows = Vec::new();
    let mut windows_unavailable = false;
    let mut date_chosen = false;
    if !form.booking_date.trim().is_empty() {
        match parse_date(&form.booking_date).and_then(|date| window.check(date)) {
            Ok(date) => {
                date_chosen = true;
                let open = state.availability.windows(date).await;
                match ReadOutcome::from_result(open, "availability") {
                    ReadOutcome::Ready(open) => {
                        windows = open
                            .iter()
                            .map(|slot| WindowOption {
                                value: format_short_time(slot.start_time),
                                label: slot.label(),
                                selected: Some(slot.start_time) == chosen_time,
                            })
                            .collect();
                    }
                    ReadOutcome::Unavailable => windows_unavailable = true,
                }
            }
            Err(err) => {
                if toast.is_none() {
                    toast = Some(Notification::invalid_input(&err.to_string()));
                }
            }
        }
    }

    BookingTemplate {
        form,
        services,
        services_unavailable,
        min_date: format_date(window.first),
        max_date: format_date(window.last),
        date_chosen,
        windows,
        windows_unavailable,
        toast,
    }
}

/// `GET /booking?date=&service_id=&status=`
pub async fn form<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Query(query): Query<BookingQuery>,
) -> BookingTemplate
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let toast = (query.status == "confirmed").then(Notification::booking_confirmed);
    render(&state, query.into(), toast).await
}

/// `POST /booking`: submit the booking form (PRG).
pub async fn submit<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Form(form): Form<BookingForm>,
) -> SubmitResponse
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let result = match form.to_request() {
        Ok(request) => state.bookings.submit(request, today()).await,
        Err(err) => Err(BeautyCareError::from(err)),
    };

    match &result {
        Ok(_) => SubmitResponse::Redirect(Redirect::to("/booking?status=confirmed")),
        Err(err) => {
            let status = status_for(err);
            let toast = notification_for(&result);
            let page = render(&state, form, Some(toast)).await;
            SubmitResponse::Rejected(status, page)
        }
    }
}
