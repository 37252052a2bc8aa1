//! Hour angle, altitude and azimuth from equatorial coordinates.
//!
//! All angles are decimal degrees in and out; conversion to radians
//! happens only around the trig calls.
//!
//! Conventions:
//! - hour angle grows westward from the local meridian, range [0, 360)
//! - azimuth is measured from north through east, range [0, 360]

use std::fmt::{Display, Formatter};

/// Below this value of `cos(alt)·cos(lat)` the azimuth is undefined
/// (object at zenith/nadir, or observer at a pole).
///
/// `asin` next to ±1 only resolves the altitude to a few 1e-8 rad, so an
/// object exactly overhead can leave `cos(alt)` around 1e-8.
pub const DEGENERATE_EPS: f64 = 1e-7;

/// Altitude and azimuth of an object, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Altitude above the horizon, range [-90, 90].
    pub altitude_deg: f64,
    /// Azimuth from north through east, range [0, 360].
    /// `None` when the geometry leaves it undefined.
    pub azimuth_deg: Option<f64>,
}

impl HorizontalCoords {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude_deg > 0.0
    }
}

impl Display for HorizontalCoords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.azimuth_deg {
            Some(az) => write!(f, "alt {:.4}°, az {:.4}°", self.altitude_deg, az),
            None => write!(f, "alt {:.4}°, az undefined", self.altitude_deg),
        }
    }
}

/// Hour angle from local sidereal time and right ascension.
///
/// Both inputs must already lie in [0, 360), so one +360 correction is
/// enough. Returns degrees in [0, 360).
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    let mut ha = lst_deg - ra_deg;
    if ha < 0.0 {
        ha += 360.0;
    }
    // a difference just below zero rounds to exactly 360 after the shift
    if ha >= 360.0 { 0.0 } else { ha }
}

/// Altitude of an object in degrees, range [-90, 90].
///
/// sin(alt) = sin(dec)·sin(lat) + cos(dec)·cos(lat)·cos(ha)
///
/// The sine is clamped to [-1, 1] before `asin`.
pub fn altitude_deg(lat_deg: f64, ha_deg: f64, dec_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    let ha = ha_deg.to_radians();
    let dec = dec_deg.to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
    log::trace!("altitude: sin_alt={sin_alt}");
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Azimuth of an object in degrees, range [0, 360].
///
/// cos(az) = (sin(dec) − sin(alt)·sin(lat)) / (cos(alt)·cos(lat))
///
/// `acos` only yields [0, 180]; when `sin(ha) > 0` the object is west of
/// the meridian and the azimuth is `360 − az`.
///
/// Returns `None` when `|cos(alt)·cos(lat)| < DEGENERATE_EPS`.
pub fn azimuth_deg(lat_deg: f64, alt_deg: f64, ha_deg: f64, dec_deg: f64) -> Option<f64> {
    let lat = lat_deg.to_radians();
    let alt = alt_deg.to_radians();
    let ha = ha_deg.to_radians();
    let dec = dec_deg.to_radians();

    let denom = alt.cos() * lat.cos();
    if denom.is_nan() || denom.abs() < DEGENERATE_EPS {
        log::debug!("azimuth undefined: cos(alt)·cos(lat) = {denom}");
        return None;
    }

    let cos_az = (dec.sin() - alt.sin() * lat.sin()) / denom;
    log::trace!("azimuth: cos_az={cos_az}");
    let az = cos_az.clamp(-1.0, 1.0).acos().to_degrees();

    Some(if ha.sin() > 0.0 { 360.0 - az } else { az })
}

/// Altitude then azimuth for an object at hour angle `ha_deg`.
pub fn equatorial_to_horizontal(lat_deg: f64, ha_deg: f64, dec_deg: f64) -> HorizontalCoords {
    let altitude_deg = altitude_deg(lat_deg, ha_deg, dec_deg);
    let azimuth_deg = azimuth_deg(lat_deg, altitude_deg, ha_deg, dec_deg);
    HorizontalCoords {
        altitude_deg,
        azimuth_deg,
    }
}
