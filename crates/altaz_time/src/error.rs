//! Error types for calendar validation.

/// Errors from validating a UTC calendar value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    #[error("invalid {field}: {value}")]
    InvalidCalendar { field: &'static str, value: f64 },
    /// The calendar date does not exist (e.g. February 30).
    #[error("date does not exist: {0}")]
    NonexistentDate(String),
}
