//! Command-line timestamps → UTC.
//!
//! This is the only place a local time is turned into UTC; everything
//! past this point takes `DateTime<Utc>`.

use anyhow::{anyhow, bail};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// IANA zone name such as `America/New_York`.
pub fn parse_zone(name: &str) -> anyhow::Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow!("unknown time zone {name:?}: {e}"))
}

/// Parse RFC 3339 with any offset, or a naive date-time read as wall-clock
/// time in `zone` (UTC when `zone` is `None`).
///
/// An explicit offset or trailing `Z` always wins over `zone`.
pub fn parse_timestamp(s: &str, zone: Option<Tz>) -> anyhow::Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        if let Some(tz) = zone {
            log::debug!("{s}: explicit offset used instead of {tz}");
        }
        return Ok(dt.with_timezone(&Utc));
    }

    let (naive_txt, zulu) = match s.strip_suffix('Z') {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive_txt, fmt).ok())
        .ok_or_else(|| {
            anyhow!(
                "expected RFC 3339 (2021-01-08T23:00:00-05:00) or YYYY-MM-DDThh:mm:ss[Z], got {s:?}"
            )
        })?;

    match zone {
        Some(tz) if !zulu => local_to_utc(&naive, tz),
        _ => Ok(Utc.from_utc_datetime(&naive)),
    }
}

fn local_to_utc(naive: &NaiveDateTime, tz: Tz) -> anyhow::Result<DateTime<Utc>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => {
            let utc = dt.with_timezone(&Utc);
            log::debug!("{naive} {tz} ({}) is {utc}", dt.offset());
            Ok(utc)
        }
        LocalResult::Ambiguous(a, b) => bail!(
            "{naive} is ambiguous in {tz} ({} or {}); give an explicit offset",
            a.offset(),
            b.offset()
        ),
        LocalResult::None => bail!("{naive} does not exist in {tz} (skipped by a clock change)"),
    }
}
