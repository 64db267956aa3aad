//! REST datastore error types.

use beautycare_domain::error::BeautyCareError;
use serde::Deserialize;

/// Postgres `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Error body returned by the datastore on a failed request.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Errors specific to the REST datastore adapter.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// URL or API key missing from the configuration.
    #[error("datastore {0} is not configured")]
    NotConfigured(&'static str),

    /// The API key cannot be sent as a header value.
    #[error("invalid API key")]
    InvalidApiKey(#[source] reqwest::header::InvalidHeaderValue),

    /// The request could not be sent or the body could not be read.
    #[error("datastore request failed")]
    Http(#[from] reqwest::Error),

    /// The datastore answered with a non-success status.
    #[error("datastore returned {status}: {}", .body.message.as_deref().unwrap_or("no message"))]
    Status { status: u16, body: ErrorBody },

    /// A row did not match the expected shape.
    #[error("unexpected row from datastore")]
    Row(#[source] BeautyCareError),
}

impl RestError {
    /// Whether the datastore rejected a write because of a unique constraint.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Status { status, body } => {
                *status == 409 || body.code.as_deref() == Some(UNIQUE_VIOLATION)
            }
            _ => false,
        }
    }
}

impl From<RestError> for BeautyCareError {
    fn from(err: RestError) -> Self {
        Self::Storage(Box::new(err))
    }
}
