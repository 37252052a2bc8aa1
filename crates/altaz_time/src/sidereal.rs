//! Mean sidereal time from a J2000.0 day offset.
//!
//! GMST polynomial in degrees:
//!   280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
//! where d is days since J2000.0 (UT) and T = d / 36525.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4.

use crate::julian::julian_centuries;

/// Reduce an angle in degrees into [0, 360).
///
/// `rem_euclid` can round up to exactly 360 for tiny negative inputs;
/// that case maps to 0.
pub(crate) fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Greenwich mean sidereal time in degrees, range [0, 360).
pub fn greenwich_mean_sidereal_time_deg(days: f64) -> f64 {
    local_mean_sidereal_time_deg(days, 0.0)
}

/// Local mean sidereal time in degrees at an east-positive longitude.
///
/// Returns degrees in [0, 360).
pub fn local_mean_sidereal_time_deg(days: f64, longitude_east_deg: f64) -> f64 {
    let t = julian_centuries(days);
    let t2 = t * t;
    let t3 = t2 * t;

    let raw = 280.460_618_37 + 360.985_647_366_29 * days + 0.000_387_933 * t2
        - t3 / 38_710_000.0
        + longitude_east_deg;

    let lmst = wrap_360(raw);
    log::trace!("lmst: days={days} lon={longitude_east_deg} raw={raw} wrapped={lmst}");
    lmst
}
