//! HTTP error response mapping.

use askama::Template;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use beautycare_domain::error::{BeautyCareError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Client-facing message; storage details are logged instead.
fn public_message(err: &BeautyCareError) -> String {
    match err {
        BeautyCareError::Validation(err) => err.to_string(),
        BeautyCareError::NotFound(err) => err.to_string(),
        BeautyCareError::Conflict(err) => err.to_string(),
        BeautyCareError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            "internal server error".to_string()
        }
    }
}

pub(crate) fn status_for(err: &BeautyCareError) -> StatusCode {
    match err {
        BeautyCareError::Validation(_) => StatusCode::BAD_REQUEST,
        BeautyCareError::NotFound(_) => StatusCode::NOT_FOUND,
        BeautyCareError::Conflict(_) => StatusCode::CONFLICT,
        BeautyCareError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps [`BeautyCareError`] to a JSON response with appropriate status code.
pub struct ApiError(BeautyCareError);

impl From<BeautyCareError> for ApiError {
    fn from(err: BeautyCareError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let error = public_message(&self.0);
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    title: String,
    message: String,
    back_href: &'static str,
    back_label: &'static str,
}

/// Maps [`BeautyCareError`] to an HTML error page.
pub struct PageError(BeautyCareError);

impl From<BeautyCareError> for PageError {
    fn from(err: BeautyCareError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let page = match &self.0 {
            BeautyCareError::NotFound(err) => ErrorTemplate {
                title: format!("{} not found", err.entity),
                message: "It may have been removed from our menu.".to_string(),
                back_href: "/services",
                back_label: "Back to services",
            },
            BeautyCareError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                ErrorTemplate {
                    title: "Something went wrong".to_string(),
                    message: "Please try again in a moment.".to_string(),
                    back_href: "/",
                    back_label: "Back to home",
                }
            }
            other => ErrorTemplate {
                title: "Invalid request".to_string(),
                message: public_message(other),
                back_href: "/",
                back_label: "Back to home",
            },
        };

        (status, Html(page.to_string())).into_response()
    }
}
