//! Home page: hero, highlighted services and a call to action.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use beautycare_domain::salon::{self, HIGHLIGHTS, Highlight};

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    name: &'static str,
    tagline: &'static str,
    highlights: &'static [Highlight],
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`
pub async fn index() -> HomeTemplate {
    HomeTemplate {
        name: salon::NAME,
        tagline: salon::TAGLINE,
        highlights: &HIGHLIGHTS,
    }
}
