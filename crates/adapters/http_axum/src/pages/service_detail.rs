//! Service detail page.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::error::{BeautyCareError, NotFoundError};
use beautycare_domain::id::ServiceId;
use beautycare_domain::service::Service;

use crate::error::PageError;
use crate::state::AppState;

/// Service detail page template.
#[derive(Template)]
#[template(path = "service_detail.html")]
pub struct ServiceDetailTemplate {
    service: Service,
    book_href: String,
}

impl IntoResponse for ServiceDetailTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /services/:id`
///
/// An id that does not parse is treated like an unknown one.
pub async fn detail<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Path(id): Path<String>,
) -> Result<ServiceDetailTemplate, PageError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let service_id = ServiceId::parse(&id).map_err(|_| {
        PageError::from(BeautyCareError::from(NotFoundError {
            entity: "Service",
            id: id.clone(),
        }))
    })?;
    let service = state.catalog.get_service(service_id).await?;

    Ok(ServiceDetailTemplate {
        book_href: format!("/booking?service_id={}", service.id),
        service,
    })
}
