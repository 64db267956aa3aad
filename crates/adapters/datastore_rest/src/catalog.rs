//! Services and gallery over the REST datastore.

use std::future::Future;

use beautycare_app::ports::{GalleryRepository, ServiceRepository};
use beautycare_domain::error::BeautyCareError;
use beautycare_domain::gallery::GalleryImage;
use beautycare_domain::id::ServiceId;
use beautycare_domain::service::Service;

use crate::client::{Order, Query, RestClient};
use crate::rows::{GalleryRow, ServiceRow};

pub struct RestServiceRepository {
    client: RestClient,
}

impl RestServiceRepository {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

impl ServiceRepository for RestServiceRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            let query = Query::table("services").order("category", Order::Asc);
            let rows: Vec<ServiceRow> = client.select(&query).await?;
            Ok(rows.into_iter().map(Service::from).collect())
        }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            let query = Query::table("services").eq("id", id).limit(1);
            let rows: Vec<ServiceRow> = client.select(&query).await?;
            Ok(rows.into_iter().next().map(Service::from))
        }
    }
}

pub struct RestGalleryRepository {
    client: RestClient,
}

impl RestGalleryRepository {
    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

impl GalleryRepository for RestGalleryRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<GalleryImage>, BeautyCareError>> + Send {
        let client = self.client.clone();
        async move {
            let query = Query::table("gallery_images").order("created_at", Order::Desc);
            let rows: Vec<GalleryRow> = client.select(&query).await?;
            Ok(rows.into_iter().map(GalleryImage::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::serve;
    use axum::Router;
    use axum::extract::RawQuery;
    use axum::routing::get;
    use serde_json::json;

    #[tokio::test]
    async fn should_return_none_when_no_row_matches() {
        let router = Router::new().route(
            "/services",
            get(|RawQuery(query): RawQuery| async move {
                assert!(query.unwrap_or_default().contains("limit=1"));
                axum::Json(json!([]))
            }),
        );
        let repo = RestServiceRepository::new(serve(router).await);

        assert!(repo.get_by_id(ServiceId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_order_gallery_newest_first() {
        let router = Router::new().route(
            "/gallery_images",
            get(|RawQuery(query): RawQuery| async move {
                let query = query.unwrap_or_default();
                if query.contains("order=created_at.desc") {
                    axum::Json(json!([{
                        "id": "3f6f8f0a-1c1b-4f44-9f0e-2a7b3c4d5e6f",
                        "url": "/img/a.jpg",
                        "category": "hair",
                        "alt_text": null,
                        "created_at": "2024-05-01T08:00:00+00:00"
                    }]))
                } else {
                    axum::Json(json!([]))
                }
            }),
        );
        let repo = RestGalleryRepository::new(serve(router).await);

        let images = repo.get_all().await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].alt_text, "");
    }
}
