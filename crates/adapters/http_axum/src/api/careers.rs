//! JSON REST handler for career applications.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use beautycare_app::ports::{
    BookingRepository, CareerApplicationRepository, GalleryRepository, ServiceRepository,
    SlotRepository,
};
use beautycare_domain::career::{ApplicationForm, CareerApplication, SkillSet};

use crate::error::ApiError;
use crate::state::AppState;

/// Experience may arrive as a number or as the text typed in the form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Years(u32),
    Text(String),
}

impl Default for Experience {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Request body for an application.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateApplicationRequest {
    pub name: String,
    pub phone: String,
    pub experience_years: Experience,
    pub skills: SkillSet,
    pub message: String,
}

impl From<CreateApplicationRequest> for ApplicationForm {
    fn from(req: CreateApplicationRequest) -> Self {
        let experience_years = match req.experience_years {
            Experience::Years(years) => years.to_string(),
            Experience::Text(text) => text,
        };
        Self {
            name: req.name,
            phone: req.phone,
            experience_years,
            skills: req.skills,
            message: req.message,
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<CareerApplication>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `POST /api/career-applications`
pub async fn create<SR, GR, SL, BR, CR>(
    State(state): State<AppState<SR, GR, SL, BR, CR>>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    GR: GalleryRepository + Send + Sync + 'static,
    SL: SlotRepository + Send + Sync + 'static,
    BR: BookingRepository + Send + Sync + 'static,
    CR: CareerApplicationRepository + Send + Sync + 'static,
{
    let application = state.careers.submit(req.into()).await?;
    Ok(CreateResponse::Created(Json(application)))
}
