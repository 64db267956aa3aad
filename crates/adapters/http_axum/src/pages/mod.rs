//! Server-side rendered HTML pages (no JavaScript).

pub mod about;
pub mod booking;
pub mod careers;
pub mod contact;
pub mod gallery;
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod service_detail;
pub mod services;

use axum::Router;
use axum::routing::get;

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::category::{CatalogView, Categorized};

use crate::state::AppState;

/// Build the sub-router for SSR HTML pages.
pub fn routes<SR, GR, SL, BR, CR>() -> Router<AppState<SR, GR, SL, BR, CR>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index))
        .route("/about", get(about::index))
        .route("/contact", get(contact::index))
        .route("/services", get(services::list::<SR, GR, SL, BR, CR>))
        .route(
            "/services/{id}",
            get(service_detail::detail::<SR, GR, SL, BR, CR>),
        )
        .route("/gallery", get(gallery::list::<SR, GR, SL, BR, CR>))
        .route(
            "/booking",
            get(booking::form::<SR, GR, SL, BR, CR>).post(booking::submit::<SR, GR, SL, BR, CR>),
        )
        .route(
            "/careers",
            get(careers::form).post(careers::submit::<SR, GR, SL, BR, CR>),
        )
}

/// A category link above a catalog.
pub struct Chip {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One chip per category, `all` first, linking back to `path`.
pub fn chips<T: Categorized>(view: &CatalogView<T>, path: &str) -> Vec<Chip> {
    view.categories()
        .into_iter()
        .map(|label| Chip {
            href: format!("{path}?category={}", encode_query_value(&label)),
            active: label == view.filter.as_str(),
            label,
        })
        .collect()
}

/// A titled blurb (values, benefits).
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

pub(crate) fn features(rows: &[(&'static str, &'static str)]) -> Vec<Feature> {
    rows.iter()
        .map(|&(title, text)| Feature { title, text })
        .collect()
}

/// Percent-encode a query value; unreserved characters pass through.
pub(crate) fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
