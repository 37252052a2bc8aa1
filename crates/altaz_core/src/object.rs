//! Fixed celestial objects and the alt/az pipeline.

use std::fmt::{Display, Formatter};

use altaz_frames::{
    DegMin, HorizontalCoords, Sign, dm_to_decimal, equatorial_to_horizontal, hm_to_degrees,
    hour_angle_deg,
};
use altaz_time::{UtcTime, days_since_j2000, local_mean_sidereal_time_deg};

use crate::error::CoreError;
use crate::observer::ObserverLocation;

/// Descriptive fields carried for display only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectInfo {
    pub name: String,
    pub common_name: String,
    pub object_type: String,
    pub constellation: String,
    /// Distance in kilo-light-years.
    pub distance_kly: f64,
}

impl ObjectInfo {
    pub fn new(
        name: impl Into<String>,
        object_type: impl Into<String>,
        constellation: impl Into<String>,
        distance_kly: f64,
    ) -> Self {
        Self {
            name: name.into(),
            common_name: String::new(),
            object_type: object_type.into(),
            constellation: constellation.into(),
            distance_kly,
        }
    }

    pub fn with_common_name(mut self, common_name: impl Into<String>) -> Self {
        self.common_name = common_name.into();
        self
    }
}

/// An object at a fixed equatorial position.
///
/// Right ascension and declination are kept both as entered and in
/// decimal degrees. The decimal values are derived once in the constructor
/// and the object cannot be mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    info: ObjectInfo,
    ra_hm: [f64; 2],
    dec: DegMin,
    ra_deg: f64,
    dec_deg: f64,
}

impl CelestialObject {
    /// Build from right ascension `[hours, minutes]` and declination
    /// `[degrees, minutes]`.
    ///
    /// The declination sign is read off the degrees field; use
    /// [`Self::with_signed_declination`] for declinations between 0° and −1°.
    pub fn new(info: ObjectInfo, ra_hm: [f64; 2], dec_dm: [f64; 2]) -> Result<Self, CoreError> {
        Self::with_signed_declination(info, ra_hm, DegMin::from_pair(dec_dm[0], dec_dm[1]))
    }

    pub fn with_signed_declination(
        info: ObjectInfo,
        ra_hm: [f64; 2],
        dec: DegMin,
    ) -> Result<Self, CoreError> {
        let ra_deg = hm_to_degrees(ra_hm[0], ra_hm[1]);
        if !ra_deg.is_finite() || !(0.0..360.0).contains(&ra_deg) {
            return Err(CoreError::InvalidRightAscension(ra_deg));
        }
        let dec_deg = dec.to_decimal();
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(CoreError::InvalidDeclination(dec_deg));
        }
        Ok(Self {
            info,
            ra_hm,
            dec,
            ra_deg,
            dec_deg,
        })
    }

    /// Build from parsed right ascension (hours and minutes of time) and
    /// declination. A negative right ascension is rejected.
    pub fn from_deg_min(info: ObjectInfo, ra: DegMin, dec: DegMin) -> Result<Self, CoreError> {
        if ra.sign == Sign::Negative {
            return Err(CoreError::InvalidRightAscension(ra.to_decimal() * 15.0));
        }
        Self::with_signed_declination(info, [ra.degrees, ra.minutes], dec)
    }

    pub fn info(&self) -> &ObjectInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Right ascension as entered, `[hours, minutes]`.
    pub fn ra_hm(&self) -> [f64; 2] {
        self.ra_hm
    }

    /// Declination as entered.
    pub fn dec(&self) -> DegMin {
        self.dec
    }

    /// Right ascension in decimal degrees, range [0, 360).
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    /// Declination in decimal degrees, range [-90, 90].
    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Hour angle in degrees at a UTC instant and east-positive longitude.
    pub fn hour_angle_deg(&self, utc: &UtcTime, longitude_east_deg: f64) -> f64 {
        let days = days_since_j2000(utc);
        let lmst = local_mean_sidereal_time_deg(days, longitude_east_deg);
        let ha = hour_angle_deg(lmst, self.ra_deg);
        log::debug!(
            "{}: {utc} days={days} lmst={lmst} ra={} ha={ha}",
            self.info.name,
            self.ra_deg
        );
        ha
    }

    /// Altitude and azimuth from `(degrees, minutes)` observer pairs.
    ///
    /// `timestamp_utc` must already be UTC. Longitude is east positive.
    /// The pairs follow the [`dm_to_decimal`] sign rule and are not range
    /// checked; [`Self::altaz_at`] takes a validated location instead.
    pub fn calc_altaz(
        &self,
        timestamp_utc: impl Into<UtcTime>,
        lat_dm: [f64; 2],
        lon_dm: [f64; 2],
    ) -> HorizontalCoords {
        let lat = dm_to_decimal(lat_dm[0], lat_dm[1]);
        let lon = dm_to_decimal(lon_dm[0], lon_dm[1]);
        self.horizontal(&timestamp_utc.into(), lat, lon)
    }

    /// Altitude and azimuth as seen from `observer`.
    ///
    /// Fails only when `timestamp_utc` is not a real calendar instant.
    pub fn altaz_at(
        &self,
        timestamp_utc: impl Into<UtcTime>,
        observer: &ObserverLocation,
    ) -> Result<HorizontalCoords, CoreError> {
        let utc = timestamp_utc.into();
        utc.validate()?;
        Ok(self.horizontal(&utc, observer.latitude_deg(), observer.longitude_deg()))
    }

    fn horizontal(&self, utc: &UtcTime, lat_deg: f64, lon_deg: f64) -> HorizontalCoords {
        let ha = self.hour_angle_deg(utc, lon_deg);
        let coords = equatorial_to_horizontal(lat_deg, ha, self.dec_deg);
        log::debug!("{}: {coords}", self.info.name);
        coords
    }
}

impl Display for CelestialObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let info = &self.info;
        write!(f, "{}", info.name)?;
        if !info.common_name.is_empty() {
            write!(f, " ({})", info.common_name)?;
        }
        if !info.object_type.is_empty() {
            write!(f, ", {}", info.object_type)?;
        }
        if !info.constellation.is_empty() {
            write!(f, " in {}", info.constellation)?;
        }
        if info.distance_kly > 0.0 {
            write!(f, ", {} kly", info.distance_kly)?;
        }
        write!(
            f,
            "; RA {}h{}m, Dec {}",
            self.ra_hm[0], self.ra_hm[1], self.dec
        )
    }
}
