//! Careers port: persistence for candidate applications.

use std::future::Future;

use beautycare_domain::career::CareerApplication;
use beautycare_domain::error::BeautyCareError;

/// Insert-only access to the `career_applications` table.
pub trait CareerApplicationRepository {
    fn create(
        &self,
        application: CareerApplication,
    ) -> impl Future<Output = Result<CareerApplication, BeautyCareError>> + Send;
}
