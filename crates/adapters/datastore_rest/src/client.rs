//! Thin HTTP client for the datastore's table endpoints.

use std::fmt::Display;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::Response;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::RestConfig;
use crate::error::{ErrorBody, RestError};

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A `select` against one table, expressed as query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: &'static str,
    params: Vec<(String, String)>,
}

impl Query {
    /// Every column of `table`.
    #[must_use]
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    /// Keep rows where `column` equals `value`.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, order: Order) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.{}", order.as_str())));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

/// Authenticated client bound to one datastore.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base: String,
}

impl RestClient {
    /// # Errors
    ///
    /// Returns [`RestError::NotConfigured`] when the URL or key is empty,
    /// [`RestError::InvalidApiKey`] when the key is not a valid header
    /// value, or [`RestError::Http`] when the client cannot be built.
    pub fn new(config: &RestConfig) -> Result<Self, RestError> {
        if config.url.trim().is_empty() {
            return Err(RestError::NotConfigured("url"));
        }
        if config.api_key.trim().is_empty() {
            return Err(RestError::NotConfigured("api key"));
        }

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key).map_err(RestError::InvalidApiKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(RestError::InvalidApiKey)?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, table: &str) -> String {
        format!("{}/{table}", self.base)
    }

    /// Run `query` and decode every returned row.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on transport failure, a non-success status or
    /// an undecodable body.
    pub async fn select<T: DeserializeOwned>(&self, query: &Query) -> Result<Vec<T>, RestError> {
        let response = self
            .http
            .get(self.url(query.table))
            .query(query.params())
            .send()
            .await?;
        let rows = check(response).await?.json().await?;
        Ok(rows)
    }

    /// Insert one row without asking for it back.
    ///
    /// # Errors
    ///
    /// Returns [`RestError`] on transport failure or a non-success status;
    /// see [`RestError::is_conflict`] for unique-constraint rejections.
    pub async fn insert<B>(&self, table: &str, row: &B) -> Result<(), RestError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http
            .post(self.url(table))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, RestError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), code = ?body.code, "datastore request rejected");
    Err(RestError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::Router;

    /// Serve `router` on an ephemeral port and return a client pointed at it.
    pub(crate) async fn serve(router: Router) -> RestClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        RestClient::new(&RestConfig {
            url: format!("http://{addr}/"),
            api_key: "anon-key".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn should_build_filter_and_order_params() {
        let query = Query::table("available_slots")
            .eq("slot_date", "2024-06-01")
            .eq("is_blocked", false)
            .order("start_time", Order::Asc);

        let params: Vec<(&str, &str)> = query
            .params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            params,
            vec![
                ("select", "*"),
                ("slot_date", "eq.2024-06-01"),
                ("is_blocked", "eq.false"),
                ("order", "start_time.asc"),
            ]
        );
    }

    #[test]
    fn should_refuse_missing_api_key() {
        let result = RestClient::new(&RestConfig {
            url: "https://project.example.co/rest/v1".to_string(),
            ..RestConfig::default()
        });
        assert!(matches!(result, Err(RestError::NotConfigured("api key"))));
    }

    #[tokio::test]
    async fn should_send_api_key_and_query_string() {
        use axum::extract::RawQuery;
        use axum::http::HeaderMap;
        use axum::routing::get;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);
        let router = Router::new().route(
            "/services",
            get(move |headers: HeaderMap, RawQuery(query): RawQuery| {
                let recorder = Arc::clone(&recorder);
                async move {
                    let key = headers
                        .get("apikey")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    recorder
                        .lock()
                        .unwrap()
                        .extend([key, auth, query.unwrap_or_default()]);
                    axum::Json(serde_json::json!([{ "name": "Haircut" }]))
                }
            }),
        );
        let client = serve(router).await;

        let rows: Vec<serde_json::Value> = client
            .select(&Query::table("services").order("category", Order::Asc))
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], "anon-key");
        assert_eq!(seen[1], "Bearer anon-key");
        assert_eq!(seen[2], "select=*&order=category.asc");
    }

    #[tokio::test]
    async fn should_surface_error_body_on_rejected_insert() {
        use axum::http::StatusCode as AxumStatus;
        use axum::routing::post;

        let router = Router::new().route(
            "/bookings",
            post(|| async {
                (
                    AxumStatus::CONFLICT,
                    axum::Json(serde_json::json!({
                        "code": "23505",
                        "message": "duplicate key value violates unique constraint"
                    })),
                )
            }),
        );
        let client = serve(router).await;

        let err = client
            .insert("bookings", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }
}
