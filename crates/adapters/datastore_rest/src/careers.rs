//! Career applications over the REST datastore.

use std::future::Future;

use beautycare_app::ports::CareerApplicationRepository;
use beautycare_domain::career::CareerApplication;
use beautycare_domain::error::BeautyCareError;

use crate::client::RestClient;

pub struct RestCareerApplicationRepository {
    client: RestClient,
}

impl RestCareerApplicationRepository {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

impl CareerApplicationRepository for RestCareerApplicationRepository {
    fn create(
        &self,
        application: CareerApplication,
    ) -> impl Future<Output = Result<CareerApplication, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            client.insert("career_applications", &application).await?;
            Ok(application)
        }
    }
}
