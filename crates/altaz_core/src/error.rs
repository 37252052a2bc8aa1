//! Error types for building objects, observers and sessions.

use altaz_frames::AngleParseError;
use altaz_time::TimeError;

/// Errors from validating pipeline inputs or loading a session file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Right ascension is non-finite or outside [0h, 24h).
    #[error("right ascension out of range [0h, 24h): {0}°")]
    InvalidRightAscension(f64),
    /// Declination is non-finite or outside [-90°, 90°].
    #[error("declination out of range [-90°, 90°]: {0}°")]
    InvalidDeclination(f64),
    /// Latitude or longitude is non-finite or out of range.
    #[error("invalid observer location: {0}")]
    InvalidLocation(String),
    /// Timestamp does not name a real UTC instant.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Sexagesimal text could not be parsed.
    #[error("invalid {field}: {source}")]
    Angle {
        field: &'static str,
        #[source]
        source: AngleParseError,
    },
    /// Session file is malformed.
    #[error("config error: {0}")]
    Config(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
