//! Services catalog page with category chips.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use beautycare_app::outcome::ReadOutcome;
use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::category::CategoryFilter;
use beautycare_domain::service::Service;

use super::{Chip, chips};
use crate::api::CategoryQuery;
use crate::state::AppState;

/// Services list page template.
#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    chips: Vec<Chip>,
    services: Vec<Service>,
    unavailable: bool,
}

impl IntoResponse for ServicesTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /services?category=`
///
/// A failed read renders a "could not load" notice instead of an empty menu.
pub async fn list<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Query(query): Query<CategoryQuery>,
) -> ServicesTemplate
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let filter = CategoryFilter::from_query(query.category.as_deref());
    match state.catalog.browse(filter).await {
        ReadOutcome::Ready(view) => ServicesTemplate {
            chips: chips(&view, "/services"),
            services: view.visible().into_iter().cloned().collect(),
            unavailable: false,
        },
        ReadOutcome::Unavailable => ServicesTemplate {
            chips: Vec::new(),
            services: Vec::new(),
            unavailable: true,
        },
    }
}
