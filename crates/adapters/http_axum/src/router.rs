//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and the HTML pages at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, GR, SL, BR, CR>(state: AppState<SR, GR, SL, BR, CR>) -> Router
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Same as [`build`], plus stylesheets and images served from
/// `static_dir` under `/static`.
pub fn build_with_static<SR, GR, SL, BR, CR>(
    state: AppState<SR, GR, SL, BR, CR>,
    static_dir: impl AsRef<Path>,
) -> Router
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    build(state).nest_service("/static", ServeDir::new(static_dir.as_ref()))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::{Days, NaiveDate, NaiveTime};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use beautycare_app::services::availability_service::AvailabilityService;
    use beautycare_app::services::career_service::CareerService;
    use beautycare_app::services::catalog_service::CatalogService;
    use beautycare_app::services::gallery_service::GalleryService;
    use beautycare_domain::booking::Booking;
    use beautycare_domain::career::CareerApplication;
    use beautycare_domain::error::BeautyCareError;
    use beautycare_domain::gallery::GalleryImage;
    use beautycare_domain::id::ServiceId;
    use beautycare_domain::service::Service;
    use beautycare_domain::slot::Slot;
    use beautycare_domain::time::today;

    #[derive(Clone, Default)]
    struct StubServiceRepo {
        services: Vec<Service>,
        broken: bool,
    }

    struct StubGalleryRepo;

    #[derive(Clone, Default)]
    struct StubSlotRepo {
        slots: Vec<Slot>,
    }

    #[derive(Clone, Default)]
    struct StubBookingRepo {
        stored: Arc<Mutex<Vec<Booking>>>,
        calls: Arc<Mutex<usize>>,
        fail_writes: bool,
    }

    #[derive(Clone, Default)]
    struct StubApplicationRepo {
        stored: Arc<Mutex<Vec<CareerApplication>>>,
        fail_writes: bool,
    }

    impl ServiceRepository for StubServiceRepo {
        async fn get_all(&self) -> Result<Vec<Service>, BeautyCareError> {
            if self.broken {
                return Err(BeautyCareError::storage(std::io::Error::other("offline")));
            }
            Ok(self.services.clone())
        }
        async fn get_by_id(&self, id: ServiceId) -> Result<Option<Service>, BeautyCareError> {
            Ok(self.services.iter().find(|s| s.id == id).cloned())
        }
    }

    impl GalleryRepository for StubGalleryRepo {
        async fn get_all(&self) -> Result<Vec<GalleryImage>, BeautyCareError> {
            Ok(vec![
                GalleryImage::new("/static/img/g1.jpg", "bridal", "Bridal look").unwrap(),
            ])
        }
    }

    impl SlotRepository for StubSlotRepo {
        async fn find_open_by_date(&self, date: NaiveDate) -> Result<Vec<Slot>, BeautyCareError> {
            Ok(self
                .slots
                .iter()
                .filter(|s| s.slot_date == date && !s.is_blocked)
                .cloned()
                .collect())
        }
    }

    impl BookingRepository for StubBookingRepo {
        async fn create(&self, booking: Booking) -> Result<Booking, BeautyCareError> {
            *self.calls.lock().unwrap() += 1;
            if self.fail_writes {
                return Err(BeautyCareError::storage(std::io::Error::other("insert rejected")));
            }
            self.stored.lock().unwrap().push(booking.clone());
            Ok(booking)
        }
        async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Booking>, BeautyCareError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self
                .stored
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.booking_date == date)
                .cloned()
                .collect())
        }
    }

    impl CareerApplicationRepository for StubApplicationRepo {
        async fn create(
            &self,
            application: CareerApplication,
        ) -> Result<CareerApplication, BeautyCareError> {
            if self.fail_writes {
                return Err(BeautyCareError::storage(std::io::Error::other("insert rejected")));
            }
            self.stored.lock().unwrap().push(application.clone());
            Ok(application)
        }
    }

    fn tomorrow() -> NaiveDate {
        today().checked_add_days(Days::new(1)).unwrap()
    }

    fn at(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn service(name: &str, category: &str) -> Service {
        Service::builder()
            .name(name)
            .category(category)
            .price("₹700")
            .build()
            .unwrap()
    }

    struct Harness {
        app: Router,
        bookings: StubBookingRepo,
        applications: StubApplicationRepo,
        services: Vec<Service>,
    }

    fn harness_with(services: StubServiceRepo) -> Harness {
        harness_inner(services, false)
    }

    fn harness_inner(services: StubServiceRepo, fail_writes: bool) -> Harness {
        let slots = StubSlotRepo {
            slots: vec![
                Slot::open(tomorrow(), at(9), at(10)).unwrap(),
                Slot::open(tomorrow(), at(10), at(11)).unwrap(),
                Slot::open(tomorrow(), at(11), at(12)).unwrap(),
            ],
        };
        let bookings = StubBookingRepo {
            fail_writes,
            ..StubBookingRepo::default()
        };
        let applications = StubApplicationRepo {
            fail_writes,
            ..StubApplicationRepo::default()
        };
        let listed = services.services.clone();
        let state = AppState::new(
            CatalogService::new(services),
            GalleryService::new(StubGalleryRepo),
            AvailabilityService::new(slots, bookings.clone()),
            CareerService::new(applications.clone()),
        );
        Harness {
            app: build(state),
            bookings,
            applications,
            services: listed,
        }
    }

    fn catalog() -> StubServiceRepo {
        StubServiceRepo {
            services: vec![
                Service::builder()
                    .name("Haircut")
                    .category("hair")
                    .price("₹700")
                    .detail("Trim")
                    .detail("Layer cut")
                    .build()
                    .unwrap(),
                service("Gold Facial", "skin"),
                service("Highlights", "hair"),
            ],
            broken: false,
        }
    }

    fn harness() -> Harness {
        harness_with(catalog())
    }

    /// Reads succeed, every insert is rejected by the datastore.
    fn harness_failing_writes() -> Harness {
        harness_inner(catalog(), true)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(harness().app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_render_only_selected_category_on_services_page() {
        let (status, body) = send(harness().app, get("/services?category=hair")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Haircut"));
        assert!(body.contains("Highlights"));
        assert!(!body.contains("Gold Facial"));
    }

    #[tokio::test]
    async fn should_list_service_details_on_catalog_cards() {
        let (status, body) = send(harness().app, get("/services")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<li>Trim</li>"));
        assert!(body.contains("<li>Layer cut</li>"));
    }

    #[tokio::test]
    async fn should_render_could_not_load_when_catalog_read_fails() {
        let h = harness_with(StubServiceRepo {
            broken: true,
            ..StubServiceRepo::default()
        });

        let (status, body) = send(h.app, get("/services")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("could not load"));
    }

    #[tokio::test]
    async fn should_render_service_not_found_page_for_unknown_id() {
        let uri = format!("/services/{}", ServiceId::new());
        let (status, body) = send(harness().app, get(&uri)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Service not found"));
    }

    #[tokio::test]
    async fn should_treat_garbled_service_id_as_not_found() {
        let (status, _) = send(harness().app, get("/services/not-a-uuid")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_render_detail_with_booking_link() {
        let h = harness();
        let id = h.services[1].id;

        let (status, body) = send(h.app, get(&format!("/services/{id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Gold Facial"));
        assert!(body.contains(&format!("/booking?service_id={id}")));
    }

    #[tokio::test]
    async fn should_list_derived_categories_as_json() {
        let (status, body) = send(harness().app, get("/api/services/categories")).await;

        assert_eq!(status, StatusCode::OK);
        let categories: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(categories, vec!["all", "hair", "skin"]);
    }

    #[tokio::test]
    async fn should_return_sequenced_availability_as_json() {
        let uri = format!("/api/availability?date={tomorrow}&seq=7", tomorrow = tomorrow());
        let (status, body) = send(harness().app, get(&uri)).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["sequence"], 7);
        assert_eq!(json["slots"].as_array().unwrap().len(), 3);
        assert_eq!(json["slots"][0]["label"], "09:00-10:00");
    }

    #[tokio::test]
    async fn should_show_missing_information_without_datastore_call() {
        let h = harness();

        let (status, body) = send(
            h.app,
            post_form("/booking", "customer_name=Asha&phone=9800000000"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Missing Information"));
        assert!(body.contains("Asha"));
        assert_eq!(*h.bookings.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn should_redirect_after_successful_booking() {
        let h = harness();
        let id = h.services[0].id;
        let body = format!(
            "service_id={id}&customer_name=Asha&phone=9800000000&booking_date={}&booking_time=10:00",
            tomorrow()
        );

        let response = h.app.oneshot(post_form("/booking", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/booking?status=confirmed"
        );
        let stored = h.bookings.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].service_name, "Haircut");
        assert_eq!(stored[0].booking_time, at(10));
    }

    #[tokio::test]
    async fn should_hide_booked_window_on_booking_page() {
        let h = harness();
        let body = format!(
            "customer_name=Asha&phone=9800000000&booking_date={}&booking_time=10:00",
            tomorrow()
        );
        let (status, _) = send(h.app.clone(), post_form("/booking", &body)).await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (status, page) = send(h.app, get(&format!("/booking?date={}", tomorrow()))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(page.contains("09:00-10:00"));
        assert!(!page.contains("10:00-11:00"));
        assert!(page.contains("11:00-12:00"));
    }

    #[tokio::test]
    async fn should_reject_double_booking_via_api_with_conflict() {
        let h = harness();
        let payload = serde_json::json!({
            "customer_name": "Asha",
            "phone": "9800000000",
            "booking_date": tomorrow().to_string(),
            "booking_time": "09:00",
        });

        let (first, _) = send(h.app.clone(), post_json("/api/bookings", &payload)).await;
        let (second, body) = send(h.app, post_json("/api/bookings", &payload)).await;

        assert_eq!(first, StatusCode::CREATED);
        assert_eq!(second, StatusCode::CONFLICT);
        assert!(body.contains("no longer available"));
    }

    #[tokio::test]
    async fn should_store_zero_experience_and_redirect_on_application() {
        let h = harness();

        let response = h
            .app
            .oneshot(post_form(
                "/careers",
                "name=Divya&phone=9811111111&experience_years=abc&skills=Waxing",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let stored = h.applications.stored.lock().unwrap();
        assert_eq!(stored[0].experience_years, 0);
        assert!(stored[0].skills.contains("Waxing"));
    }

    #[tokio::test]
    async fn should_keep_typed_values_when_application_is_incomplete() {
        let h = harness();

        let (status, body) = send(
            h.app,
            post_form("/careers", "name=Divya&experience_years=3&skills=Threading"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Divya"));
        assert!(h.applications.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_typed_values_when_booking_insert_rejected() {
        let h = harness_failing_writes();
        let id = h.services[0].id;
        let body = format!(
            "service_id={id}&customer_name=Asha+Rao&phone=9800000000&booking_date={}&booking_time=10:00&notes=window+seat",
            tomorrow()
        );

        let (status, page) = send(h.app, post_form("/booking", &body)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.contains("Booking Failed"));
        assert!(page.contains("value=\"Asha Rao\""));
        assert!(page.contains("value=\"9800000000\""));
        assert!(page.contains("window seat"));
        assert!(h.bookings.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_typed_values_when_application_insert_rejected() {
        let h = harness_failing_writes();

        let (status, page) = send(
            h.app,
            post_form(
                "/careers",
                "name=Divya&phone=9811111111&experience_years=4&skills=Threading",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.contains("Submission Failed"));
        assert!(page.contains("value=\"Divya\""));
        assert!(page.contains("value=\"9811111111\""));
        assert!(page.contains("value=\"Threading\" checked"));
        assert!(h.applications.stored.lock().unwrap().is_empty());
    }
}
