//! Career service: persists applications from the "Join Our Team" form.

use beautycare_domain::career::{ApplicationForm, CareerApplication};
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::notification::Notification;

use crate::ports::CareerApplicationRepository;

pub struct CareerService<R> {
    repo: R,
}

impl<R: CareerApplicationRepository> CareerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate the form and insert one application.
    ///
    /// Experience that does not parse is stored as 0; an empty skill set is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`BeautyCareError::Validation`] when name or phone is empty,
    /// or a storage error from the repository.
    pub async fn submit(&self, form: ApplicationForm) -> Result<CareerApplication, BeautyCareError> {
        let application = form.into_application()?;
        let saved = self.repo.create(application).await.inspect_err(|err| {
            tracing::warn!(error = %err, "career application rejected");
        })?;
        tracing::info!(
            application_id = %saved.id,
            experience_years = saved.experience_years,
            skills = saved.skills.len(),
            "career application received"
        );
        Ok(saved)
    }
}

/// Toast shown after an application attempt.
#[must_use]
pub fn notification_for(result: &Result<CareerApplication, BeautyCareError>) -> Notification {
    match result {
        Ok(_) => Notification::application_submitted(),
        Err(BeautyCareError::Validation(err)) => Notification::invalid_input(&err.to_string()),
        Err(_) => Notification::submission_failed(),
    }
}
