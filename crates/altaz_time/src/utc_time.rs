//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the calendar representation the pipeline consumes.
//! Values built from `chrono::DateTime<Utc>` are UTC by construction.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::error::TimeError;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check that every field names a real instant.
    ///
    /// `second` may reach 60.x to admit a leap second.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidCalendar {
                field: "month",
                value: f64::from(self.month),
            });
        }
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::NonexistentDate(format!(
                "{:04}-{:02}-{:02}",
                self.year, self.month, self.day
            )));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidCalendar {
                field: "hour",
                value: f64::from(self.hour),
            });
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidCalendar {
                field: "minute",
                value: f64::from(self.minute),
            });
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidCalendar {
                field: "second",
                value: self.second,
            });
        }
        Ok(())
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        // chrono encodes a leap second as nanosecond >= 1e9
        let second = f64::from(dt.second()) + f64::from(dt.nanosecond()) * 1e-9;
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn from_chrono_utc() {
        let dt = Utc.with_ymd_and_hms(2021, 1, 9, 4, 0, 0).unwrap();
        assert_eq!(UtcTime::from(dt), UtcTime::new(2021, 1, 9, 4, 0, 0.0));
    }

    #[test]
    fn from_offset_datetime_after_conversion() {
        // 23:00 at UTC−5 is 04:00 UTC the next day
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = est.with_ymd_and_hms(2021, 1, 8, 23, 0, 0).unwrap();
        let utc = UtcTime::from(local.with_timezone(&Utc));
        assert_eq!(utc, UtcTime::new(2021, 1, 9, 4, 0, 0.0));
    }

    #[test]
    fn from_chrono_keeps_subseconds() {
        let dt = Utc
            .with_ymd_and_hms(2024, 1, 15, 12, 30, 45)
            .unwrap()
            .with_nanosecond(250_000_000)
            .unwrap();
        let t = UtcTime::from(dt);
        assert!((t.second - 45.25).abs() < 1e-9);
    }

    #[test]
    fn validate_accepts_real_dates() {
        assert!(UtcTime::new(2024, 2, 29, 23, 59, 59.999).validate().is_ok());
        assert!(UtcTime::new(2016, 12, 31, 23, 59, 60.5).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert!(matches!(
            UtcTime::new(2024, 13, 1, 0, 0, 0.0).validate(),
            Err(TimeError::InvalidCalendar { field: "month", .. })
        ));
        assert!(matches!(
            UtcTime::new(2023, 2, 29, 0, 0, 0.0).validate(),
            Err(TimeError::NonexistentDate(_))
        ));
        assert!(matches!(
            UtcTime::new(2024, 1, 1, 24, 0, 0.0).validate(),
            Err(TimeError::InvalidCalendar { field: "hour", .. })
        ));
        assert!(matches!(
            UtcTime::new(2024, 1, 1, 0, 60, 0.0).validate(),
            Err(TimeError::InvalidCalendar { field: "minute", .. })
        ));
        assert!(UtcTime::new(2024, 1, 1, 0, 0, f64::NAN).validate().is_err());
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 45.123);
        let s = t.to_string();
        assert!(s.contains("12:30:45.123"), "got: {s}");
    }
}
