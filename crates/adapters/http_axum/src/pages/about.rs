//! About page: the salon's story and values.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use beautycare_domain::salon::VALUES;

use super::{Feature, features};

/// About page template.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    values: Vec<Feature>,
}

impl IntoResponse for AboutTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /about`
pub async fn index() -> AboutTemplate {
    AboutTemplate {
        values: features(&VALUES),
    }
}
