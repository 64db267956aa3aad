//! JSON REST handlers for the services catalog.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::category::{self, CategoryFilter};
use beautycare_domain::id::ServiceId;
use beautycare_domain::service::Service;

use super::CategoryQuery;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Service>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Service>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/services?category=`
pub async fn list<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Query(query): Query<CategoryQuery>,
) -> Result<ListResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let selected = CategoryFilter::from_query(query.category.as_deref());
    let services = state.catalog.list_services().await?;
    let visible = category::filter(&services, &selected)
        .into_iter()
        .cloned()
        .collect();
    Ok(ListResponse::Ok(Json(visible)))
}

/// `GET /api/services/categories`
pub async fn categories<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
) -> Result<Json<Vec<String>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let services = state.catalog.list_services().await?;
    Ok(Json(category::categories(&services)))
}

/// `GET /api/services/:id`
pub async fn get<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let service_id = ServiceId::parse(&id)?;
    let service = state.catalog.get_service(service_id).await?;
    Ok(GetResponse::Ok(Json(service)))
}
