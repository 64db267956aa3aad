//! Catalog ports: read-only access to services and gallery images.

use std::future::Future;

use beautycare_domain::error::BeautyCareError;
use beautycare_domain::gallery::GalleryImage;
use beautycare_domain::id::ServiceId;
use beautycare_domain::service::Service;

/// Read access to the `services` table.
pub trait ServiceRepository {
    /// All services, ordered by category.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, BeautyCareError>> + Send;

    /// A single service by its unique identifier.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, BeautyCareError>> + Send;
}

/// Read access to the `gallery_images` table.
pub trait GalleryRepository {
    /// All images, newest first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<GalleryImage>, BeautyCareError>> + Send;
}
