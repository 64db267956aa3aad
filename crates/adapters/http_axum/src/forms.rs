//! Raw form payloads shared by the HTML pages and the JSON API.
//!
//! Browsers submit every field as text, empty when untouched. These types
//! keep the raw strings so a rejected form can be re-rendered exactly as
//! typed, and convert into domain requests on submission.

use serde::{Deserialize, Serialize};

use beautycare_domain::booking::BookingRequest;
use beautycare_domain::career::{ApplicationForm, SkillSet};
use beautycare_domain::error::ValidationError;
use beautycare_domain::id::ServiceId;
use beautycare_domain::time::{parse_date, parse_time};

/// Booking form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub service_id: String,
    pub customer_name: String,
    pub phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub notes: String,
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl BookingForm {
    /// Parse the typed fields. Empty date, time or service stay unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a non-empty date, time or service
    /// id does not parse.
    pub fn to_request(&self) -> Result<BookingRequest, ValidationError> {
        Ok(BookingRequest {
            service_id: non_empty(&self.service_id)
                .map(ServiceId::parse)
                .transpose()?,
            customer_name: self.customer_name.clone(),
            phone: self.phone.clone(),
            booking_date: non_empty(&self.booking_date)
                .map(parse_date)
                .transpose()?,
            booking_time: non_empty(&self.booking_time)
                .map(parse_time)
                .transpose()?,
            notes: self.notes.clone(),
        })
    }
}

/// Careers form as submitted.
#[derive(Debug, Clone, Default)]
pub struct CareerForm {
    pub name: String,
    pub phone: String,
    pub experience_years: String,
    pub skills: SkillSet,
    pub message: String,
}

impl CareerForm {
    /// Build from url-encoded pairs; `skills` may repeat, one pair per
    /// ticked checkbox. Unknown keys are ignored.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "phone" => form.phone = value,
                "experience_years" => form.experience_years = value,
                "skills" => form.skills.insert(&value),
                "message" => form.message = value,
                _ => {}
            }
        }
        form
    }

    #[must_use]
    pub fn to_application_form(&self) -> ApplicationForm {
        ApplicationForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            experience_years: self.experience_years.clone(),
            skills: self.skills.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn should_leave_untouched_date_and_time_unset() {
        let form = BookingForm {
            customer_name: "Asha".to_string(),
            phone: "98".to_string(),
            ..BookingForm::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.booking_date, None);
        assert_eq!(request.booking_time, None);
        assert_eq!(request.service_id, None);
    }

    #[test]
    fn should_parse_short_time_from_selector() {
        let form = BookingForm {
            booking_date: "2024-06-01".to_string(),
            booking_time: "11:00".to_string(),
            ..BookingForm::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.booking_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(request.booking_time, NaiveTime::from_hms_opt(11, 0, 0));
    }

    #[test]
    fn should_reject_garbled_service_id() {
        let form = BookingForm {
            service_id: "not-a-uuid".to_string(),
            ..BookingForm::default()
        };
        assert!(matches!(
            form.to_request(),
            Err(ValidationError::InvalidId(_))
        ));
    }

    #[test]
    fn should_collect_repeated_skill_checkboxes() {
        let form = CareerForm::from_pairs(vec![
            pair("name", "Meena"),
            pair("skills", "Threading"),
            pair("skills", "Waxing"),
            pair("skills", "Threading"),
            pair("experience_years", "4"),
        ]);
        assert_eq!(form.name, "Meena");
        assert_eq!(form.skills.iter().collect::<Vec<_>>(), vec!["Threading", "Waxing"]);
        assert_eq!(form.to_application_form().experience_years, "4");
    }
}
