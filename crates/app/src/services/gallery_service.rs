//! Gallery service: loads portfolio images for the gallery page.

use beautycare_domain::category::{CatalogView, CategoryFilter};
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::gallery::GalleryImage;

use crate::outcome::ReadOutcome;
use crate::ports::GalleryRepository;

pub struct GalleryService<R> {
    repo: R,
}

impl<R: GalleryRepository> GalleryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All images, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_images(&self) -> Result<Vec<GalleryImage>, BeautyCareError> {
        self.repo.get_all().await
    }

    pub async fn browse(&self, filter: CategoryFilter) -> ReadOutcome<CatalogView<GalleryImage>> {
        ReadOutcome::from_result(self.list_images().await, "gallery images")
            .map(|records| CatalogView::new(records, filter))
    }
}
