//! Careers page: "Join Our Team" application form.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_app::services::career_service::notification_for;
use beautycare_domain::career::SKILL_OPTIONS;
use beautycare_domain::notification::Notification;
use beautycare_domain::salon::BENEFITS;

use super::{Feature, features};
use crate::error::status_for;
use crate::forms::CareerForm;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CareersQuery {
    pub status: String,
}

/// One checkbox of the skills group.
pub struct SkillOption {
    pub name: &'static str,
    pub checked: bool,
}

/// Careers page template.
#[derive(Template)]
#[template(path = "careers.html")]
pub struct CareersTemplate {
    form: CareerForm,
    skills: Vec<SkillOption>,
    benefits: Vec<Feature>,
    toast: Option<Notification>,
}

impl CareersTemplate {
    fn new(form: CareerForm, toast: Option<Notification>) -> Self {
        let skills = SKILL_OPTIONS
            .iter()
            .map(|&name| SkillOption {
                name,
                checked: form.skills.contains(name),
            })
            .collect();
        Self {
            form,
            skills,
            benefits: features(&BENEFITS),
            toast,
        }
    }
}

impl IntoResponse for CareersTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Response from the application form handler (PRG pattern).
pub enum SubmitResponse {
    Redirect(Redirect),
    Rejected(StatusCode, CareersTemplate),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Rejected(status, page) => (status, page).into_response(),
        }
    }
}

/// `GET /careers?status=`
pub async fn form(Query(query): Query<CareersQuery>) -> CareersTemplate {
    let toast = (query.status == "submitted").then(Notification::application_submitted);
    CareersTemplate::new(CareerForm::default(), toast)
}

/// `POST /careers`: submit an application (PRG).
///
/// Skills arrive as repeated `skills` pairs, so the body is read as a list
/// of pairs rather than a struct.
pub async fn submit<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> SubmitResponse
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let form = CareerForm::from_pairs(pairs);
    let result = state.careers.submit(form.to_application_form()).await;

    match &result {
        Ok(_) => SubmitResponse::Redirect(Redirect::to("/careers?status=submitted")),
        Err(err) => SubmitResponse::Rejected(
            status_for(err),
            CareersTemplate::new(form, Some(notification_for(&result))),
        ),
    }
}
