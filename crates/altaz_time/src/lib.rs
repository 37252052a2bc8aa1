//! Time handling for the equatorial → horizontal pipeline.
//!
//! This crate provides:
//! - `UtcTime`, the calendar representation accepted by the pipeline
//! - days since J2000.0 from a UTC calendar date
//! - local mean sidereal time in degrees
//!
//! Everything here assumes the caller already holds a UTC instant. No
//! timezone conversion happens in this crate.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, days_since_j2000, days_to_jd, julian_centuries,
};
pub use sidereal::{greenwich_mean_sidereal_time_deg, local_mean_sidereal_time_deg};
pub use utc_time::UtcTime;
