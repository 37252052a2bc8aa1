//! Altitude and azimuth of fixed celestial objects.
//!
//! This crate ties the pipeline together:
//! - [`CelestialObject`]: immutable object with RA/Dec in entered and
//!   decimal form
//! - [`ObserverLocation`]: validated latitude/longitude
//! - [`CelestialObject::calc_altaz`] / [`CelestialObject::altaz_at`]:
//!   UTC instant → days since J2000.0 → local mean sidereal time → hour
//!   angle → altitude and azimuth
//! - [`SessionConfig`]: one object and one observer read from TOML
//!
//! Timestamps must already be UTC. `chrono::DateTime<Utc>` converts
//! directly; anything in a local zone has to be converted by the caller.
//!
//! # Quick start
//!
//! ```rust
//! use altaz_core::{CelestialObject, ObjectInfo};
//! use chrono::{TimeZone, Utc};
//!
//! let info = ObjectInfo::new("M1", "Supernova Remnant", "Taurus", 6.5)
//!     .with_common_name("The Crab Nebula");
//! let m1 = CelestialObject::new(info, [5.0, 34.5], [22.0, 1.0]).unwrap();
//!
//! let when = Utc.with_ymd_and_hms(2021, 1, 9, 4, 0, 0).unwrap();
//! let coords = m1.calc_altaz(when, [42.0, 21.0], [-71.0, 3.0]);
//! assert!((coords.altitude_deg - 66.4376).abs() < 1e-3);
//! ```

pub mod config;
pub mod error;
pub mod object;
pub mod observer;

pub use config::{AngleSpec, SessionConfig};
pub use error::CoreError;
pub use object::{CelestialObject, ObjectInfo};
pub use observer::ObserverLocation;

// Re-exports so callers need only this crate for the common path.
pub use altaz_frames::{DegMin, HorizontalCoords, Sign};
pub use altaz_time::UtcTime;
