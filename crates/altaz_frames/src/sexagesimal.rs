//! Sexagesimal ↔ decimal angle conversion.
//!
//! Two input conventions are supported:
//! - bare `(degrees, minutes)` pairs, where the sign is read off the
//!   degrees field ([`dm_to_decimal`]). Such a pair cannot express
//!   −0°30′: `(-0.0, 30.0)` and `(0.0, 30.0)` both give +0.5°.
//! - [`DegMin`], which carries the sign separately from the magnitudes and
//!   round-trips every value.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::AngleParseError;

/// Decimal degrees from a `(degrees, minutes)` pair.
///
/// Negative degrees subtract the minutes, so `(-71, 3)` is −71.05°.
pub fn dm_to_decimal(degrees: f64, minutes: f64) -> f64 {
    if degrees < 0.0 {
        degrees - minutes / 60.0
    } else {
        degrees + minutes / 60.0
    }
}

/// Decimal degrees from right ascension in `(hours, minutes)`.
///
/// One hour of right ascension is 15°.
pub fn hm_to_degrees(hours: f64, minutes: f64) -> f64 {
    15.0 * (hours + minutes / 60.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

/// Signed degrees and arc-minutes.
///
/// `degrees` and `minutes` are magnitudes; `sign` applies to the whole
/// angle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DegMin {
    pub sign: Sign,
    pub degrees: f64,
    pub minutes: f64,
}

impl DegMin {
    pub fn new(sign: Sign, degrees: f64, minutes: f64) -> Self {
        Self {
            sign,
            degrees,
            minutes,
        }
    }

    /// Interpret a bare pair with the same rule as [`dm_to_decimal`].
    pub fn from_pair(degrees: f64, minutes: f64) -> Self {
        let sign = if degrees < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, degrees.abs(), minutes)
    }

    /// Split decimal degrees into whole degrees and arc-minutes.
    pub fn from_decimal(value: f64) -> Self {
        let sign = if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = value.abs();
        let degrees = magnitude.trunc();
        Self::new(sign, degrees, (magnitude - degrees) * 60.0)
    }

    pub fn to_decimal(self) -> f64 {
        let magnitude = self.degrees + self.minutes / 60.0;
        match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }
}

impl FromStr for DegMin {
    type Err = AngleParseError;

    /// Parse `"D M"`, `"D,M"`, `"D:M"` or `"D"`, with an optional leading
    /// sign that applies to the whole angle (`"-0 30"` is −0.5°).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AngleParseError::Empty);
        }
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s.strip_prefix('+').unwrap_or(s)),
        };

        let parts: Vec<&str> = body
            .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
            .filter(|p| !p.is_empty())
            .collect();
        let (deg_txt, min_txt) = match parts.as_slice() {
            [d] => (*d, None),
            [d, m] => (*d, Some(*m)),
            _ => return Err(AngleParseError::Format(s.to_string())),
        };

        let degrees = parse_component(deg_txt)?;
        if degrees < 0.0 {
            return Err(AngleParseError::Format(s.to_string()));
        }
        let minutes = match min_txt {
            Some(m) => parse_component(m)?,
            None => 0.0,
        };
        if !(0.0..60.0).contains(&minutes) {
            return Err(AngleParseError::MinutesOutOfRange(minutes.to_string()));
        }
        Ok(Self::new(sign, degrees, minutes))
    }
}

fn parse_component(txt: &str) -> Result<f64, AngleParseError> {
    txt.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AngleParseError::Number(txt.to_string()))
}

impl Display for DegMin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = match self.sign {
            Sign::Positive => "",
            Sign::Negative => "-",
        };
        // minutes are shown to 0.1′; 59.96′ rounds into the next degree
        let mut degrees = self.degrees;
        let mut minutes = (self.minutes * 10.0).round() / 10.0;
        if minutes >= 60.0 {
            degrees += 1.0;
            minutes -= 60.0;
        }
        write!(f, "{sign}{degrees}°{minutes:.1}′")
    }
}

/// Hours, minutes and seconds of time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Convert an angle in degrees to time units (15° per hour).
///
/// The angle is first reduced into [0, 360).
pub fn degrees_to_hms(deg: f64) -> Hms {
    let total_hours = deg.rem_euclid(360.0) / 15.0;
    let hours = total_hours.trunc();
    let total_minutes = (total_hours - hours) * 60.0;
    let minutes = total_minutes.trunc();
    Hms {
        hours: hours as u32 % 24,
        minutes: minutes as u32,
        seconds: (total_minutes - minutes) * 60.0,
    }
}

impl Display for Hms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (mut hours, mut minutes) = (self.hours, self.minutes);
        let mut seconds = (self.seconds * 100.0).round() / 100.0;
        if seconds >= 60.0 {
            seconds -= 60.0;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            hours = (hours + 1) % 24;
        }
        write!(f, "{hours}h{minutes:02}m{seconds:05.2}s")
    }
}
