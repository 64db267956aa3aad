//! JSON REST handler for gallery images.

use axum::Json;
use axum::extract::{Query, State};

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::category::{self, CategoryFilter};
use beautycare_domain::gallery::GalleryImage;

use super::CategoryQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/gallery?category=`: newest first.
pub async fn list<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<GalleryImage>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let selected = CategoryFilter::from_query(query.category.as_deref());
    let images = state.gallery.list_images().await?;
    Ok(Json(
        category::filter(&images, &selected)
            .into_iter()
            .cloned()
            .collect(),
    ))
}
