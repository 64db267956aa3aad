//! Toast-style notifications shown after a form submission.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    fn new(title: &str, description: &str, variant: Variant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    #[must_use]
    pub fn missing_information() -> Self {
        Self::new(
            "Missing Information",
            "Please select a date and time",
            Variant::Destructive,
        )
    }

    #[must_use]
    pub fn booking_confirmed() -> Self {
        Self::new(
            "Booking Confirmed!",
            "We'll contact you shortly to confirm your appointment.",
            Variant::Default,
        )
    }

    #[must_use]
    pub fn booking_failed() -> Self {
        Self::new(
            "Booking Failed",
            "Something went wrong. Please try again.",
            Variant::Destructive,
        )
    }

    #[must_use]
    pub fn slot_taken() -> Self {
        Self::new(
            "Time Unavailable",
            "That time was just booked. Please choose another slot.",
            Variant::Destructive,
        )
    }

    #[must_use]
    pub fn application_submitted() -> Self {
        Self::new(
            "Application Submitted!",
            "Thank you for your interest. We'll contact you soon.",
            Variant::Default,
        )
    }

    #[must_use]
    pub fn submission_failed() -> Self {
        Self::new(
            "Submission Failed",
            "Something went wrong. Please try again.",
            Variant::Destructive,
        )
    }

    /// Blocking warning for a field the visitor left empty or malformed.
    #[must_use]
    pub fn invalid_input(description: &str) -> Self {
        Self::new("Please check the form", description, Variant::Destructive)
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}
