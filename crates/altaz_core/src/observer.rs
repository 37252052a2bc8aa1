//! Observer location on the Earth's surface.

use std::fmt::{Display, Formatter};

use altaz_frames::{DegMin, dm_to_decimal};

use crate::error::CoreError;

/// Geographic location of the observer.
///
/// Stored as signed decimal degrees: latitude north positive in
/// [-90, 90], longitude east positive in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl ObserverLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, CoreError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(CoreError::InvalidLocation(format!(
                "latitude {latitude_deg}° outside [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(CoreError::InvalidLocation(format!(
                "longitude {longitude_deg}° outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Build from bare `(degrees, minutes)` pairs.
    ///
    /// The sign is read off the degrees field, so a location between 0°
    /// and −1° cannot be expressed this way; use [`Self::from_deg_min`].
    pub fn from_dm_pairs(lat_dm: [f64; 2], lon_dm: [f64; 2]) -> Result<Self, CoreError> {
        Self::new(
            dm_to_decimal(lat_dm[0], lat_dm[1]),
            dm_to_decimal(lon_dm[0], lon_dm[1]),
        )
    }

    /// Build from explicitly signed sexagesimal values.
    pub fn from_deg_min(lat: DegMin, lon: DegMin) -> Result<Self, CoreError> {
        Self::new(lat.to_decimal(), lon.to_decimal())
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}

impl Display for ObserverLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}° {ns}, {:.4}° {ew}",
            self.latitude_deg.abs(),
            self.longitude_deg.abs()
        )
    }
}
