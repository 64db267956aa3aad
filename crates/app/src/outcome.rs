//! Explicit outcome for read paths.
//!
//! A failed read is reported as [`ReadOutcome::Unavailable`] so pages can
//! tell "could not load" apart from "nothing there".

use beautycare_domain::error::BeautyCareError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome<T> {
    Ready(T),
    Unavailable,
}

impl<T> ReadOutcome<T> {
    /// Collapse a read result, logging the failure at `warn`.
    pub fn from_result(result: Result<T, BeautyCareError>, what: &'static str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => {
                tracing::warn!(error = %err, source = ?std::error::Error::source(&err), what, "read failed");
                Self::Unavailable
            }
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReadOutcome<U> {
        match self {
            Self::Ready(value) => ReadOutcome::Ready(f(value)),
            Self::Unavailable => ReadOutcome::Unavailable,
        }
    }
}

impl<T: Default> ReadOutcome<T> {
    /// The loaded value, or an empty one when the read failed.
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ready(value) => value,
            Self::Unavailable => T::default(),
        }
    }
}
