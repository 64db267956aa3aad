//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BeautyCareError`] via `#[from]` or an explicit `From` impl.

use chrono::{NaiveDate, NaiveTime};

/// Top-level error shared by the domain, application services and adapters.
#[derive(Debug, thiserror::Error)]
pub enum BeautyCareError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected before any IO happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("phone number must not be empty")]
    EmptyPhone,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("image url must not be empty")]
    EmptyUrl,

    #[error("please select a date and time")]
    MissingDateTime,

    #[error("{0} is outside the booking window")]
    DateOutOfRange(NaiveDate),

    #[error("slot end time must be after its start time")]
    InvalidTimeRange,

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("invalid identifier {0:?}")]
    InvalidId(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A write clashed with existing data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("the {time} slot on {date} is no longer available")]
    SlotUnavailable { date: NaiveDate, time: NaiveTime },
}

impl BeautyCareError {
    /// Wrap any adapter error as a storage failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: BeautyCareError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            BeautyCareError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_describe_missing_entity() {
        let err = NotFoundError {
            entity: "Service",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Service abc not found");
    }

    #[test]
    fn should_describe_unavailable_slot() {
        let err = ConflictError::SlotUnavailable {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "the 10:00:00 slot on 2024-06-01 is no longer available"
        );
    }
}
