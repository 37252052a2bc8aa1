//! Angle representations and the equatorial → horizontal conversion.
//!
//! Provides sexagesimal ↔ decimal-degree conversion (with an explicit sign
//! for values between −1° and 0°) and the hour angle, altitude and azimuth
//! stages of the pipeline.

pub mod error;
pub mod horizontal;
pub mod sexagesimal;

pub use error::AngleParseError;
pub use horizontal::{
    DEGENERATE_EPS, HorizontalCoords, altitude_deg, azimuth_deg, equatorial_to_horizontal,
    hour_angle_deg,
};
pub use sexagesimal::{DegMin, Hms, Sign, degrees_to_hms, dm_to_decimal, hm_to_degrees};
