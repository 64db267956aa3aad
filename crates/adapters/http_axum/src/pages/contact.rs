//! Contact page: phone, WhatsApp, address, hours and map.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use beautycare_domain::salon;

/// Contact page template.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    phone_display: &'static str,
    phone_href: &'static str,
    whatsapp_href: &'static str,
    address: &'static str,
    map_embed_url: &'static str,
    opening_hours: Vec<super::Feature>,
}

impl IntoResponse for ContactTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /contact`
pub async fn index() -> ContactTemplate {
    ContactTemplate {
        phone_display: salon::PHONE_DISPLAY,
        phone_href: salon::PHONE_TEL,
        whatsapp_href: salon::WHATSAPP_URL,
        address: salon::ADDRESS,
        map_embed_url: salon::MAP_EMBED_URL,
        opening_hours: super::features(&salon::OPENING_HOURS),
    }
}
