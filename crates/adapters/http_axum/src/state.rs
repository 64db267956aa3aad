//! Shared application state for axum handlers.

use std::sync::Arc;

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_app::services::availability_service::AvailabilityService;
use beautycare_app::services::booking_service::BookingService;
use beautycare_app::services::career_service::CareerService;
use beautycare_app::services::catalog_service::CatalogService;
use beautycare_app::services::gallery_service::GalleryService;

/// Application state shared across all axum handlers.
///
/// Generic over the five repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<SR, GR, SL, BR, CR> {
    /// Services catalog reads.
    pub catalog: Arc<CatalogService<SR>>,
    /// Gallery reads.
    pub gallery: Arc<GalleryService<GR>>,
    /// Open windows per date.
    pub availability: Arc<AvailabilityService<SL, BR>>,
    /// Booking submission; shares the catalog and availability services.
    pub bookings: Arc<BookingService<SR, SL, BR>>,
    /// Career application submission.
    pub careers: Arc<CareerService<CR>>,
}

impl<SR, GR, SL, BR, CR> Clone for AppState<SR, GR, SL, BR, CR> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            gallery: Arc::clone(&self.gallery),
            availability: Arc::clone(&self.availability),
            bookings: Arc::clone(&self.bookings),
            careers: Arc::clone(&self.careers),
        }
    }
}

impl<SR, GR, SL, BR, CR> AppState<SR, GR, SL, BR, CR>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    /// Create the state from service instances.
    ///
    /// The booking service is assembled here from the shared catalog and
    /// availability services.
    pub fn new(
        catalog: CatalogService<SR>,
        gallery: GalleryService<GR>,
        availability: AvailabilityService<SL, BR>,
        careers: CareerService<CR>,
    ) -> Self {
        Self::from_arcs(
            Arc::new(catalog),
            Arc::new(gallery),
            Arc::new(availability),
            Arc::new(careers),
        )
    }

    /// Create the state from pre-wrapped `Arc` services.
    pub fn from_arcs(
        catalog: Arc<CatalogService<SR>>,
        gallery: Arc<GalleryService<GR>>,
        availability: Arc<AvailabilityService<SL, BR>>,
        careers: Arc<CareerService<CR>>,
    ) -> Self {
        let bookings = Arc::new(BookingService::new(
            Arc::clone(&catalog),
            Arc::clone(&availability),
        ));
        Self {
            catalog,
            gallery,
            availability,
            bookings,
            careers,
        }
    }
}
