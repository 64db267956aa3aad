//! Career applications submitted through the "Join Our Team" form.

use serde::{Deserialize, Serialize};

use crate::error::{BeautyCareError, ValidationError};
use crate::id::ApplicationId;
use crate::time::{Timestamp, now};

/// Skills offered as checkboxes on the careers form.
pub const SKILL_OPTIONS: [&str; 8] = [
    "Hair Styling",
    "Hair Coloring",
    "Facial Treatments",
    "Bridal Makeup",
    "Threading",
    "Waxing",
    "Mehandhi",
    "Customer Service",
];

/// A set of skill tags.
///
/// Tags are unique. Insertion order is kept so the submitted payload reads
/// the way the candidate ticked the boxes, but equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `skill` if present, add it otherwise.
    pub fn toggle(&mut self, skill: &str) {
        if let Some(pos) = self.0.iter().position(|s| s == skill) {
            self.0.remove(pos);
        } else {
            self.0.push(skill.to_string());
        }
    }

    /// Add `skill` unless it is already present.
    pub fn insert(&mut self, skill: &str) {
        if !self.contains(skill) {
            self.0.push(skill.to_string());
        }
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl PartialEq for SkillSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|s| other.contains(s))
    }
}

impl Eq for SkillSet {}

impl From<Vec<String>> for SkillSet {
    fn from(values: Vec<String>) -> Self {
        let mut set = Self::new();
        for value in &values {
            set.insert(value);
        }
        set
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.0
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

/// Years of experience from free text.
///
/// Reads the leading run of decimal digits (so `"5 years"` is 5). Anything
/// without leading digits, including negative numbers, becomes 0 rather
/// than an error.
#[must_use]
pub fn parse_experience_years(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().unwrap_or(0)
}

/// A stored candidate application. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerApplication {
    pub id: ApplicationId,
    pub name: String,
    pub phone: String,
    pub experience_years: u32,
    pub skills: SkillSet,
    pub message: String,
    pub created_at: Timestamp,
}

/// What the careers form holds before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    /// Raw text from the number input.
    #[serde(default)]
    pub experience_years: String,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub message: String,
}

impl ApplicationForm {
    /// # Errors
    ///
    /// Returns an empty-field error for name or phone. An empty skill set is
    /// accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyPhone);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Propagates [`ApplicationForm::validate`] failures.
    pub fn into_application(self) -> Result<CareerApplication, BeautyCareError> {
        self.validate()?;
        Ok(CareerApplication {
            id: ApplicationId::new(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            experience_years: parse_experience_years(&self.experience_years),
            skills: self.skills,
            message: self.message,
            created_at: now(),
        })
    }
}
