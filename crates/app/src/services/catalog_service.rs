//! Catalog service: use-cases for the services menu and detail pages.

use beautycare_domain::category::{CatalogView, CategoryFilter};
use beautycare_domain::error::{BeautyCareError, NotFoundError};
use beautycare_domain::id::ServiceId;
use beautycare_domain::service::Service;

use crate::outcome::ReadOutcome;
use crate::ports::ServiceRepository;

/// Application service for reading the treatment catalog.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: ServiceRepository> CatalogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all services, ordered by category.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<Service>, BeautyCareError> {
        self.repo.get_all().await
    }

    /// Load the catalog page state for `filter`. A failed read becomes
    /// [`ReadOutcome::Unavailable`].
    pub async fn browse(&self, filter: CategoryFilter) -> ReadOutcome<CatalogView<Service>> {
        ReadOutcome::from_result(self.list_services().await, "services")
            .map(|records| CatalogView::new(records, filter))
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, BeautyCareError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Service",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Name to store alongside a booking, empty when the id is unknown or
    /// the lookup fails.
    pub async fn service_name(&self, id: Option<ServiceId>) -> String {
        let Some(id) = id else {
            return String::new();
        };
        match self.repo.get_by_id(id).await {
            Ok(Some(service)) => service.name,
            Ok(None) => String::new(),
            Err(err) => {
                tracing::warn!(error = %err, service_id = %id, "could not resolve service name");
                String::new()
            }
        }
    }
}
