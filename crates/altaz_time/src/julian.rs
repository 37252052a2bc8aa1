//! Continuous day count relative to the J2000.0 epoch.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), ch. 7, with the
//! Julian Day shifted so that 2000-01-01 12:00 UTC maps to zero.

use crate::utc_time::UtcTime;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Meeus' constant `1524.5` folded together with J2000_JD.
const J2000_OFFSET: f64 = 730_550.5;

/// Fractional days since J2000.0 for a UTC calendar instant.
///
/// January and February count as months 13 and 14 of the previous year.
/// The Gregorian correction `b = 2 − a + ⌊a/4⌋` is always applied, so the
/// result is valid for any proleptic Gregorian date. Negative before the
/// epoch.
pub fn days_since_j2000(utc: &UtcTime) -> f64 {
    let (year, month) = if utc.month <= 2 {
        (utc.year - 1, utc.month + 12)
    } else {
        (utc.year, utc.month)
    };
    let year = f64::from(year);
    let month = f64::from(month);

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let c = (365.25 * year).floor();
    let d = (30.6001 * (month + 1.0)).floor();

    let day_fraction =
        (f64::from(utc.hour) + f64::from(utc.minute) / 60.0 + utc.second / 3600.0) / 24.0;

    b + c + d - J2000_OFFSET + f64::from(utc.day) + day_fraction
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(days: f64) -> f64 {
    days / DAYS_PER_JULIAN_CENTURY
}

/// Julian Date for a day offset from J2000.0.
pub fn days_to_jd(days: f64) -> f64 {
    days + J2000_JD
}
