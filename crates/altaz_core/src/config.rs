//! Observing-session files.
//!
//! A session names one object and one observer in TOML:
//!
//! ```toml
//! date = "2021-01-08T23:00:00-05:00"
//!
//! [object]
//! name = "M1"
//! common_name = "The Crab Nebula"
//! object_type = "Supernova Remnant"
//! constellation = "Taurus"
//! distance_kly = 6.5
//! ra = [5, 34.5]
//! dec = [22, 1]
//!
//! [observer]
//! lat = [42, 21]
//! lon = "-71 3"
//! ```
//!
//! Angles may be a `[degrees, minutes]` pair, sexagesimal text (`"-0 30"`
//! keeps its sign) or a decimal number. `date` and `tz` are kept as text;
//! turning them into a UTC instant is left to the caller. `tz` is an IANA
//! zone name (`"America/New_York"`) for a `date` written without an offset.

use std::path::Path;

use altaz_frames::DegMin;
use serde::Deserialize;

use crate::error::CoreError;
use crate::object::{CelestialObject, ObjectInfo};
use crate::observer::ObserverLocation;

/// An angle as written in a session file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AngleSpec {
    /// `[degrees, minutes]`, sign read off the degrees field.
    Pair([f64; 2]),
    /// Sexagesimal text such as `"-71 3"`.
    Text(String),
    /// Decimal value.
    Decimal(f64),
}

impl AngleSpec {
    pub fn to_deg_min(&self, field: &'static str) -> Result<DegMin, CoreError> {
        match self {
            Self::Pair([d, m]) => Ok(DegMin::from_pair(*d, *m)),
            Self::Text(s) => s
                .parse()
                .map_err(|source| CoreError::Angle { field, source }),
            Self::Decimal(v) => Ok(DegMin::from_decimal(*v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectSection {
    pub name: String,
    #[serde(default)]
    pub common_name: String,
    #[serde(default)]
    pub object_type: String,
    #[serde(default)]
    pub constellation: String,
    #[serde(default)]
    pub distance_kly: f64,
    /// Right ascension in hours and minutes of time.
    pub ra: AngleSpec,
    pub dec: AngleSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverSection {
    pub lat: AngleSpec,
    /// East positive.
    pub lon: AngleSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub date: Option<String>,
    pub tz: Option<String>,
    pub object: ObjectSection,
    pub observer: ObserverSection,
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CoreError> {
        toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))
    }

    pub fn object(&self) -> Result<CelestialObject, CoreError> {
        let o = &self.object;
        let info = ObjectInfo::new(
            o.name.as_str(),
            o.object_type.as_str(),
            o.constellation.as_str(),
            o.distance_kly,
        )
        .with_common_name(o.common_name.as_str());

        CelestialObject::from_deg_min(info, o.ra.to_deg_min("ra")?, o.dec.to_deg_min("dec")?)
    }

    pub fn observer(&self) -> Result<ObserverLocation, CoreError> {
        ObserverLocation::from_deg_min(
            self.observer.lat.to_deg_min("lat")?,
            self.observer.lon.to_deg_min("lon")?,
        )
    }
}
