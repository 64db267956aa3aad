//! Column decoding helpers shared by the repositories.

use beautycare_domain::time::{self, Timestamp};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub(crate) fn decode_error<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

pub(crate) fn timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(decode_error)
}

pub(crate) fn date(value: &str) -> Result<NaiveDate, sqlx::Error> {
    time::parse_date(value).map_err(decode_error)
}

pub(crate) fn time_of_day(value: &str) -> Result<NaiveTime, sqlx::Error> {
    time::parse_time(value).map_err(decode_error)
}
