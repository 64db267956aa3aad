//! Service: a treatment on the salon's menu (haircut, facial, bridal makeup, …).

use serde::{Deserialize, Serialize};

use crate::category::Categorized;
use crate::error::{BeautyCareError, ValidationError};
use crate::id::ServiceId;

/// A treatment offered by the salon. Read-only from this application's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Free text such as `"45 mins"`.
    pub duration: String,
    /// Currency-formatted text such as `"₹1,500"`.
    pub price: String,
    /// Ordered sub-option labels; empty when the service has none.
    #[serde(default)]
    pub details: Vec<String>,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::Validation`] when `name` or `category` is empty.
    pub fn validate(&self) -> Result<(), BeautyCareError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        Ok(())
    }

    /// Price without the rupee sign; pages render their own currency marker.
    #[must_use]
    pub fn price_amount(&self) -> &str {
        self.price.trim_start_matches('₹').trim()
    }

    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

impl Categorized for Service {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    duration: Option<String>,
    price: Option<String>,
    details: Vec<String>,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn detail(mut self, label: impl Into<String>) -> Self {
        self.details.push(label.into());
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::Validation`] if `name` or `category` is missing.
    pub fn build(self) -> Result<Service, BeautyCareError> {
        let service = Service {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            details: self.details,
        };
        service.validate()?;
        Ok(service)
    }
}
