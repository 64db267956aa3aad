//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod availability;
#[allow(clippy::missing_errors_doc)]
pub mod bookings;
#[allow(clippy::missing_errors_doc)]
pub mod careers;
#[allow(clippy::missing_errors_doc)]
pub mod gallery;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use serde::Deserialize;

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};

use crate::state::AppState;

/// `?category=` query shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// Build the `/api` sub-router.
pub fn routes<SR, GR, SL, BR, CR>() -> Router<AppState<SR, GR, SL, BR, CR>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    Router::new()
        // Catalog
        .route("/services", get(services::list::<SR, GR, SL, BR, CR>))
        .route(
            "/services/categories",
            get(services::categories::<SR, GR, SL, BR, CR>),
        )
        .route("/services/{id}", get(services::get::<SR, GR, SL, BR, CR>))
        .route("/gallery", get(gallery::list::<SR, GR, SL, BR, CR>))
        // Scheduling
        .route(
            "/availability",
            get(availability::lookup::<SR, GR, SL, BR, CR>),
        )
        .route("/bookings", post(bookings::create::<SR, GR, SL, BR, CR>))
        // Careers
        .route(
            "/career-applications",
            post(careers::create::<SR, GR, SL, BR, CR>),
        )
}
