//! Gallery page with category chips and a CSS-only lightbox.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};

use beautycare_app::outcome::ReadOutcome;
use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::category::CategoryFilter;
use beautycare_domain::gallery::GalleryImage;

use super::{Chip, chips};
use crate::api::CategoryQuery;
use crate::state::AppState;

/// Gallery page template. Each thumbnail links to `#image-{id}`, an overlay
/// shown through the `:target` selector.
#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    chips: Vec<Chip>,
    images: Vec<GalleryImage>,
    unavailable: bool,
}

impl IntoResponse for GalleryTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /gallery?category=`
pub async fn list<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Query(query): Query<CategoryQuery>,
) -> GalleryTemplate
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let filter = CategoryFilter::from_query(query.category.as_deref());
    match state.gallery.browse(filter).await {
        ReadOutcome::Ready(view) => GalleryTemplate {
            chips: chips(&view, "/gallery"),
            images: view.visible().into_iter().cloned().collect(),
            unavailable: false,
        },
        ReadOutcome::Unavailable => GalleryTemplate {
            chips: Vec::new(),
            images: Vec::new(),
            unavailable: true,
        },
    }
}
