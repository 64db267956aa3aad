//! Gallery image: a portfolio photo shown on the gallery page.

use serde::{Deserialize, Serialize};

use crate::category::Categorized;
use crate::error::{BeautyCareError, ValidationError};
use crate::id::GalleryImageId;
use crate::time::{Timestamp, now};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    pub url: String,
    pub category: String,
    pub alt_text: String,
    /// Only used to list newest first.
    pub created_at: Timestamp,
}

impl GalleryImage {
    /// Create a new image record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::Validation`] when `url` or `category` is empty.
    pub fn new(
        url: impl Into<String>,
        category: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Result<Self, BeautyCareError> {
        let image = Self {
            id: GalleryImageId::new(),
            url: url.into(),
            category: category.into(),
            alt_text: alt_text.into(),
            created_at: now(),
        };
        image.validate()?;
        Ok(image)
    }

    /// # Errors
    ///
    /// Returns [`BeautyCareError::Validation`] when `url` or `category` is empty.
    pub fn validate(&self) -> Result<(), BeautyCareError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl.into());
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        Ok(())
    }
}

impl Categorized for GalleryImage {
    fn category(&self) -> &str {
        &self.category
    }
}

/// Sort newest first, keeping the relative order of equal timestamps.
pub fn sort_newest_first(images: &mut [GalleryImage]) {
    images.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
