//! Time, date and timestamp helpers.
//!
//! Dates travel as `YYYY-MM-DD` and times as `HH:MM:SS` (the datastore's
//! `date` and `time` column formats). Times typed by users may omit seconds.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for `created_at` columns.
pub type Timestamp = DateTime<Utc>;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const SHORT_TIME_FORMAT: &str = "%H:%M";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return the salon's current calendar date (server local time).
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the input does not match.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Parse an `HH:MM:SS` or `HH:MM` time.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTime`] when neither format matches.
pub fn parse_time(input: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, SHORT_TIME_FORMAT))
        .map_err(|_| ValidationError::InvalidTime(input.to_string()))
}

/// Format a date the way the datastore stores it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a time the way the datastore stores it.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Format a time for display (`HH:MM`).
#[must_use]
pub fn format_short_time(time: NaiveTime) -> String {
    time.format(SHORT_TIME_FORMAT).to_string()
}
